//! PlayStation disc hashing.
//!
//! The fingerprint covers the boot executable named by SYSTEM.CNF: its
//! bare filename followed by its contents. PS-X EXE images declare their
//! true length in the header, which the ISO-9660 record may overstate.

use rom_digest_core::cd::{append_file_content, CdTrack, TrackSelector};
use rom_digest_core::digest::hex_digest;
use rom_digest_core::iso9660::find_file_sector;
use rom_digest_core::util::read_u32_le;
use rom_digest_core::{HashContext, HashError};

use crate::system_cnf::read_boot_executable;

/// PS-X EXE header magic.
const PSX_EXE_MAGIC: &[u8; 8] = b"PS-X EXE";

/// Hash a PlayStation disc by its boot executable.
pub fn ps1_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Track(1))?;

    let exec_name = read_boot_executable(track.as_mut(), "BOOT", "cdrom:")?;
    log::debug!("boot executable is {}", exec_name);

    let exec = find_file_sector(track.as_mut(), &exec_name)?;
    let mut size = exec.size;

    // a PS-X EXE header declares the code length at offset 28; trust it
    // (plus the 2048-byte header itself) over the directory record
    let track_sector = track.to_track_sector(exec.sector).ok_or_else(|| {
        HashError::invalid_format("Boot executable lies outside the opened track")
    })?;
    let mut header = [0u8; 32];
    let n = track.read_sector(track_sector, &mut header)?;
    if n == header.len() && &header[..8] == PSX_EXE_MAGIC {
        size = read_u32_le(&header, 28).saturating_add(2048);
    }

    let mut md5 = md5::Context::new();
    md5.consume(exec_name.as_bytes());
    append_file_content(&mut md5, track.as_mut(), exec.sector, size)?;

    Ok(hex_digest(md5))
}

#[cfg(test)]
#[path = "tests/ps1_tests.rs"]
mod tests;
