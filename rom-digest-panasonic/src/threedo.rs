//! 3DO disc hashing.
//!
//! 3DO discs use the Opera filesystem rather than ISO-9660. The volume
//! header occupies the first 132 bytes of sector 0; the fingerprint covers
//! that header plus the contents of the boot executable, which is always
//! named `LaunchMe` in the root directory.

use rom_digest_core::cd::{append_track_sectors, CdTrack, TrackSelector};
use rom_digest_core::digest::hex_digest;
use rom_digest_core::util::read_u24_be;
use rom_digest_core::{HashContext, HashError};

/// Opera filesystem record identifier at the start of the volume header.
const OPERA_SIGNATURE: &[u8; 7] = b"\x01\x5A\x5A\x5A\x5A\x5A\x01";

/// Volume header length.
const VOLUME_HEADER_LEN: usize = 132;

/// Directory entry type for plain files.
const ENTRY_TYPE_FILE: u8 = 0x02;

/// Fixed part of a directory entry; copies of the file extend it.
const ENTRY_BASE_LEN: usize = 0x48;

/// Hash a 3DO disc by its volume header and LaunchMe executable.
pub fn threedo_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Track(1))?;

    let mut buffer = [0u8; 2048];
    let n = track.read_sector(0, &mut buffer[..VOLUME_HEADER_LEN])?;
    if n < VOLUME_HEADER_LEN {
        return Err(HashError::too_small(VOLUME_HEADER_LEN as u64, n as u64));
    }
    if &buffer[..7] != OPERA_SIGNATURE {
        return Err(HashError::invalid_format("Not a 3DO CD"));
    }

    let mut md5 = md5::Context::new();
    md5.consume(&buffer[..VOLUME_HEADER_LEN]);

    // block size and root directory block index, both 24-bit big-endian;
    // the real byte offset is their product
    let block_size = read_u24_be(&buffer, 0x4D);
    let root_block = read_u24_be(&buffer, 0x65);
    let mut sector = (root_block as u64 * block_size as u64 / 2048) as u32;

    let launch_me = loop {
        let n = track.read_sector(sector, &mut buffer)?;
        if n < buffer.len() {
            return Err(HashError::too_small(2048, n as u64));
        }

        // entries start at the 16-bit offset at 0x12 and end at the
        // 24-bit offset at 0x0D
        let mut offset = ((buffer[0x12] as usize) << 8) | buffer[0x13] as usize;
        let stop = (read_u24_be(&buffer, 0x0D) as usize).min(buffer.len() - ENTRY_BASE_LEN);

        let mut found = None;
        while offset < stop {
            if buffer[offset + 3] == ENTRY_TYPE_FILE {
                let name = &buffer[offset + 0x20..offset + 0x40];
                let name_len = name.iter().position(|&b| b == 0).unwrap_or(name.len());
                if name[..name_len].eq_ignore_ascii_case(b"LaunchMe") {
                    found = Some((
                        read_u24_be(&buffer, offset + 0x0D), // block size
                        read_u24_be(&buffer, offset + 0x11), // byte length
                        read_u24_be(&buffer, offset + 0x45), // block location
                    ));
                    break;
                }
            }
            offset += ENTRY_BASE_LEN + buffer[offset + 0x43] as usize * 4;
        }

        if let Some(entry) = found {
            break entry;
        }

        // the directory may continue in another sector
        let next = ((buffer[2] as u32) << 8) | buffer[3] as u32;
        if next == 0xFFFF {
            return Err(HashError::file_not_found("LaunchMe"));
        }
        sector = next;
    };

    let (file_block_size, size, file_block) = launch_me;
    let start = (file_block as u64 * file_block_size as u64 / 2048) as u32;
    log::debug!("LaunchMe starts at sector {} ({} bytes)", start, size);
    append_track_sectors(&mut md5, track.as_mut(), start, size)?;

    Ok(hex_digest(md5))
}
