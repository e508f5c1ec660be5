//! Console-to-recipe dispatch.

use rom_digest_core::digest::md5_buffer;
use rom_digest_core::path::compare_extension;
use rom_digest_core::{Console, HashContext, HashError};

use rom_digest_atari::{atari_7800_hash, lynx_hash};
use rom_digest_nec::{pce_buffer_hash, pce_cd_hash, pcfx_hash};
use rom_digest_nintendo::{ds_hash, nes_hash, snes_hash};
use rom_digest_panasonic::threedo_hash;
use rom_digest_sega::{dreamcast_hash, sega_cd_hash};
use rom_digest_sony::{ps1_hash, ps2_hash};

use crate::arcade::arcade_hash;
use crate::hasher::{buffered_file_hash, whole_file_hash};
use crate::playlist;

/// Hash in-memory ROM data for a console.
///
/// Disc consoles, Arcade, and Nintendo DS need path-based access and are
/// rejected here.
pub fn hash_from_buffer(console: Console, buffer: &[u8]) -> Result<String, HashError> {
    match console {
        Console::Nes => Ok(nes_hash(buffer)),
        Console::Snes => Ok(snes_hash(buffer)),
        Console::PcEngine => Ok(pce_buffer_hash(buffer)),
        Console::Atari7800 => Ok(atari_7800_hash(buffer)),
        Console::AtariLynx => Ok(lynx_hash(buffer)),

        Console::ThreeDo
        | Console::Dreamcast
        | Console::PcFx
        | Console::Ps1
        | Console::Ps2
        | Console::SegaCd
        | Console::Saturn
        | Console::Arcade
        | Console::NintendoDs => Err(HashError::UnsupportedConsole(console)),

        _ => Ok(md5_buffer(buffer)),
    }
}

/// Hash a file for a console.
pub fn hash_from_file(ctx: &HashContext, console: Console, path: &str) -> Result<String, HashError> {
    match console {
        // disc consoles accept playlists in place of disc images
        Console::Ps1
        | Console::Ps2
        | Console::PcEngine
        | Console::PcFx
        | Console::ThreeDo
        | Console::SegaCd
        | Console::Saturn
        | Console::Dreamcast
            if compare_extension(path, "m3u") =>
        {
            hash_from_playlist(ctx, console, path)
        }

        Console::ThreeDo => threedo_hash(ctx, path),
        Console::Dreamcast => dreamcast_hash(ctx, path),
        Console::SegaCd | Console::Saturn => sega_cd_hash(ctx, path),
        Console::Ps1 => ps1_hash(ctx, path),
        Console::Ps2 => ps2_hash(ctx, path),
        Console::PcFx => pcfx_hash(ctx, path),

        // PC Engine is hybrid: HuCards hash as buffers, CD images as discs
        Console::PcEngine => {
            if compare_extension(path, "cue") || compare_extension(path, "chd") {
                pce_cd_hash(ctx, path)
            } else {
                buffered_file_hash(ctx, path, pce_buffer_hash)
            }
        }

        Console::Arcade => Ok(arcade_hash(path)),
        Console::NintendoDs => ds_hash(ctx, path),

        Console::Nes => buffered_file_hash(ctx, path, nes_hash),
        Console::Snes => buffered_file_hash(ctx, path, snes_hash),
        Console::Atari7800 => buffered_file_hash(ctx, path, atari_7800_hash),
        Console::AtariLynx => buffered_file_hash(ctx, path, lynx_hash),

        _ => whole_file_hash(ctx, path),
    }
}

/// Hash the first disc referenced by an `.m3u` playlist.
pub fn hash_from_playlist(
    ctx: &HashContext,
    console: Console,
    path: &str,
) -> Result<String, HashError> {
    let disc = playlist::first_entry(ctx, path)?;
    log::debug!("playlist {} resolves to {}", path, disc);
    hash_from_file(ctx, console, &disc)
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
