//! PlayStation 2 disc hashing.
//!
//! Same shape as the PlayStation recipe: SYSTEM.CNF names the boot
//! executable under the `BOOT2` key. PS2 executables are ELF images, and
//! the ISO-9660 record's size is authoritative.

use rom_digest_core::cd::{append_file_content, CdTrack, TrackSelector};
use rom_digest_core::digest::hex_digest;
use rom_digest_core::iso9660::find_file_sector;
use rom_digest_core::{HashContext, HashError};

use crate::system_cnf::read_boot_executable;

/// ELF magic.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Hash a PlayStation 2 disc by its boot executable.
pub fn ps2_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Track(1))?;

    let exec_name = read_boot_executable(track.as_mut(), "BOOT2", "cdrom0:")?;
    log::debug!("boot executable is {}", exec_name);

    let exec = find_file_sector(track.as_mut(), &exec_name)?;

    let track_sector = track.to_track_sector(exec.sector).ok_or_else(|| {
        HashError::invalid_format("Boot executable lies outside the opened track")
    })?;
    let mut header = [0u8; 4];
    let n = track.read_sector(track_sector, &mut header)?;
    if n < header.len() || header != *ELF_MAGIC {
        return Err(HashError::invalid_format(
            "Boot executable did not contain ELF marker",
        ));
    }

    let mut md5 = md5::Context::new();
    md5.consume(exec_name.as_bytes());
    append_file_content(&mut md5, track.as_mut(), exec.sector, exec.size)?;

    Ok(hex_digest(md5))
}

#[cfg(test)]
#[path = "tests/ps2_tests.rs"]
mod tests;
