//! Candidate iteration for ambiguous paths.
//!
//! Container extensions like `.bin`, `.cue`, and `.chd` do not identify a
//! console, so hashing one means trying recipes in a fixed priority order
//! until one succeeds. The order is a pure function of the extension and,
//! for `.bin`/`.dsk`, the probed size.

use rom_digest_core::path::{compare_extension, extension};
use rom_digest_core::{Console, HashContext, HashError};

use crate::dispatch;
use crate::playlist;

/// Playlists referencing playlists are resolved at most this deep.
const MAX_PLAYLIST_DEPTH: u32 = 10;

/// `.bin` files larger than this are probably disc images.
const DISC_IMAGE_THRESHOLD: u64 = 32 * 1024 * 1024;

/// Iterator over candidate consoles for a path, yielding each successful
/// `(console, hash)` pair in priority order.
pub struct HashIterator<'a> {
    ctx: &'a HashContext,
    path: String,
    buffer: Option<&'a [u8]>,
    consoles: Vec<Console>,
    index: usize,
}

impl<'a> HashIterator<'a> {
    /// Build the candidate list for `path`, optionally with the file's
    /// contents already in memory.
    pub fn new(
        ctx: &'a HashContext,
        path: &str,
        buffer: Option<&'a [u8]>,
    ) -> Result<Self, HashError> {
        let mut path = path.to_string();
        let mut buffer = buffer;

        // playlists are resolved up front so candidates reflect the disc
        let mut depth = 0;
        while compare_extension(&path, "m3u") {
            depth += 1;
            if depth > MAX_PLAYLIST_DEPTH {
                return Err(HashError::invalid_format("Playlist nesting too deep"));
            }
            path = playlist::first_entry(ctx, &path)?;
            buffer = None;
        }

        let mut iterator = Self {
            ctx,
            path,
            buffer,
            consoles: Vec::new(),
            index: 0,
        };
        iterator.select_candidates();
        Ok(iterator)
    }

    /// The candidate consoles in the order they will be tried.
    pub fn consoles(&self) -> &[Console] {
        &self.consoles
    }

    /// Append a candidate unless it is already queued.
    fn push(&mut self, console: Console) {
        if !self.consoles.contains(&console) {
            self.consoles.push(console);
        }
    }

    /// Buffer length when one was supplied, file size otherwise.
    fn probed_size(&self) -> u64 {
        match self.buffer {
            Some(buffer) => buffer.len() as u64,
            None => self.ctx.file_size(&self.path).unwrap_or(0),
        }
    }

    fn select_candidates(&mut self) {
        let ext = extension(&self.path).to_ascii_lowercase();
        match ext.as_str() {
            "cue" => {
                for console in [
                    Console::Ps1,
                    Console::Ps2,
                    Console::PcEngine,
                    Console::ThreeDo,
                    Console::PcFx,
                    Console::SegaCd,
                ] {
                    self.push(console);
                }
            }
            "chd" => {
                for console in [
                    Console::Ps1,
                    Console::Ps2,
                    Console::Dreamcast,
                    Console::PcEngine,
                    Console::ThreeDo,
                    Console::PcFx,
                    Console::SegaCd,
                ] {
                    self.push(console);
                }
            }
            "iso" => {
                for console in [Console::Ps2, Console::ThreeDo, Console::SegaCd] {
                    self.push(console);
                }
            }
            "bin" => {
                if self.probed_size() > DISC_IMAGE_THRESHOLD {
                    // too big for a cartridge dump: likely a raw disc image
                    for console in [
                        Console::ThreeDo,
                        Console::Ps1,
                        Console::Ps2,
                        Console::SegaCd,
                    ] {
                        self.push(console);
                    }
                }
                self.push(Console::MegaDrive);
            }
            "dsk" => {
                match self.probed_size() {
                    368_640 | 737_280 | 184_320 => self.push(Console::Msx),
                    143_360 | 116_480 => self.push(Console::AppleII),
                    _ => {}
                }
                self.push(Console::Msx);
                self.push(Console::AppleII);
            }
            "zip" | "7z" => self.push(Console::Arcade),

            "2d" => self.push(Console::SharpX1),
            "a78" => self.push(Console::Atari7800),
            "bs" | "fig" | "sfc" | "smc" | "swc" => self.push(Console::Snes),
            "cas" | "mx1" | "mx2" | "ri" => self.push(Console::Msx),
            "col" => self.push(Console::ColecoVision),
            "d88" => {
                self.push(Console::Pc8800);
                self.push(Console::SharpX1);
            }
            "fd" | "k7" | "m5" | "m7" | "sap" => self.push(Console::ThomsonTo8),
            "fds" | "nes" => self.push(Console::Nes),
            "gb" => self.push(Console::GameBoy),
            "gba" => self.push(Console::GameBoyAdvance),
            "gbc" => self.push(Console::GameBoyColor),
            "gdi" => self.push(Console::Dreamcast),
            "gg" => self.push(Console::GameGear),
            "jag" => self.push(Console::Jaguar),
            "lnx" => self.push(Console::AtariLynx),
            "md" => self.push(Console::MegaDrive),
            "min" => self.push(Console::PokemonMini),
            "n64" | "ndd" => self.push(Console::N64),
            "nds" => self.push(Console::NintendoDs),
            "ngc" => self.push(Console::NeoGeoPocket),
            "pce" | "sgx" => self.push(Console::PcEngine),
            "rom" => {
                self.push(Console::Msx);
                self.push(Console::ThomsonTo8);
            }
            "sg" => self.push(Console::Sg1000),
            "sv" => self.push(Console::Supervision),
            "tap" => self.push(Console::Oric),
            "tic" => self.push(Console::Tic80),
            "vb" => self.push(Console::VirtualBoy),
            "woz" => self.push(Console::AppleII),
            "wsc" => self.push(Console::WonderSwan),

            _ => self.push(Console::GameBoy),
        }
    }
}

impl Iterator for HashIterator<'_> {
    type Item = (Console, String);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.consoles.len() {
            let console = self.consoles[self.index];
            self.index += 1;

            let result = match self.buffer {
                Some(buffer) => dispatch::hash_from_buffer(console, buffer),
                None => dispatch::hash_from_file(self.ctx, console, &self.path),
            };
            match result {
                Ok(hash) => return Some((console, hash)),
                Err(err) => log::debug!("{} candidate rejected: {}", console.short_name(), err),
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "tests/iterator_tests.rs"]
mod tests;
