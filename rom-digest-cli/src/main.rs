//! rom-digest CLI
//!
//! Command-line interface for fingerprinting ROM dumps, disc images, and
//! playlists.

use clap::Parser;

use rom_digest_lib::{hash_from_file, Console, HashContext, HashError, HashIterator};

#[derive(Parser)]
#[command(
    name = "rom-digest",
    version,
    about = "Compute canonical MD5 fingerprints for ROM dumps and disc images"
)]
struct Cli {
    /// Hash for a specific console instead of probing by extension
    #[arg(short, long)]
    console: Option<Console>,

    /// List known console names and exit
    #[arg(long)]
    list_consoles: bool,

    /// ROM files, disc images, or playlists to fingerprint
    paths: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.list_consoles {
        for console in Console::all() {
            println!(
                "{:<12} {:<12} {}",
                console.short_name(),
                console.manufacturer(),
                console.display_name()
            );
        }
        return;
    }

    if cli.paths.is_empty() {
        eprintln!("error: no input files (see --help)");
        std::process::exit(2);
    }

    let ctx = HashContext::new();
    let mut failures = 0;

    for path in &cli.paths {
        match hash_path(&ctx, cli.console, path) {
            Ok((console, hash)) => {
                println!("{}  {}  [{}]", hash, path, console.short_name());
            }
            Err(err) => {
                eprintln!("{}: {}", path, err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}

/// Hash one path, either with an explicit console or by candidate
/// iteration.
fn hash_path(
    ctx: &HashContext,
    console: Option<Console>,
    path: &str,
) -> Result<(Console, String), HashError> {
    if let Some(console) = console {
        let hash = hash_from_file(ctx, console, path)?;
        return Ok((console, hash));
    }

    let mut candidates = HashIterator::new(ctx, path, None)?;
    candidates
        .next()
        .ok_or_else(|| HashError::invalid_format("No candidate console produced a hash"))
}
