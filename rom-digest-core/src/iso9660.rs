//! ISO-9660 file locator.
//!
//! Resolves a backslash-separated on-disc path to the disc-absolute sector
//! and byte length of the file's content. Filename comparison is
//! case-insensitive; directory entries spanning more than one sector are
//! not handled (real boot files live in the first directory sector).

use crate::cd::CdTrack;
use crate::error::HashError;
use crate::util::{read_u24_le, read_u32_le};

/// Location of a file's content on the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscFile {
    /// Disc-absolute sector where the content begins.
    pub sector: u32,
    /// Content length in bytes.
    pub size: u32,
}

/// Resolve `path` (backslash-separated, in the disc's case) to the sector
/// and size of its content.
pub fn find_file_sector(track: &mut dyn CdTrack, path: &str) -> Result<DiscFile, HashError> {
    if let Some((parent, name)) = path.rsplit_once('\\') {
        // resolve the containing directory first, then search within it
        let directory = find_file_sector(track, parent)?;
        scan_directory(track, directory.sector, name)
    } else {
        let mut buf = [0u8; 256];
        let n = track.read_sector(16, &mut buf)?;
        if n < buf.len() {
            return Err(HashError::too_small(256, n as u64));
        }
        // root directory record sits at offset 156 of the volume
        // descriptor; its extent is 2 bytes in, little-endian copy first
        let root_sector = read_u24_le(&buf, 156 + 2);
        scan_directory(track, root_sector, path)
    }
}

/// Search one directory sector for `name` and return the matching record's
/// extent and length.
fn scan_directory(
    track: &mut dyn CdTrack,
    directory_sector: u32,
    name: &str,
) -> Result<DiscFile, HashError> {
    let track_sector = track
        .to_track_sector(directory_sector)
        .ok_or_else(|| HashError::file_not_found(name.to_string()))?;

    let mut buf = [0u8; 2048];
    let n = track.read_sector(track_sector, &mut buf)?;
    if n < buf.len() {
        return Err(HashError::too_small(2048, n as u64));
    }

    let target = name.as_bytes();
    let mut offset = 0usize;
    while offset < buf.len() {
        let record_len = buf[offset] as usize;
        if record_len == 0 || offset + record_len > buf.len() {
            break;
        }

        // the identifier starts 33 bytes into the record; a match must be
        // followed by a version suffix (";1") or, for directory entries, a
        // NUL terminator
        if offset + 33 + target.len() < buf.len() {
            let id = &buf[offset + 33..offset + 33 + target.len()];
            let terminator = buf[offset + 33 + target.len()];
            if id.eq_ignore_ascii_case(target) && (terminator == b';' || terminator == 0) {
                let sector = read_u24_le(&buf, offset + 2);
                let size = read_u32_le(&buf, offset + 10);
                log::debug!("found {} at sector {} ({} bytes)", name, sector, size);
                return Ok(DiscFile { sector, size });
            }
        }

        offset += record_len;
    }

    Err(HashError::file_not_found(name.to_string()))
}
