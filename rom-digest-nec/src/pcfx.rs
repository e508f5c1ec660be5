//! PC-FX disc hashing.
//!
//! The boot header fills the first two sectors of the data track; the
//! digest covers the first 128 bytes of the second sector (title included)
//! plus the program payload it points at. Some discs put the boot header
//! on track 2, and a few are mastered as PC Engine CDs.

use rom_digest_core::cd::{CdTrack, TrackSelector};
use rom_digest_core::digest::hex_digest;
use rom_digest_core::util::read_u24_le;
use rom_digest_core::{HashContext, HashError};

use crate::pc_engine::{pce_cd_track_hash, BOOT_SIGNATURE};

/// Identifier at the start of the data track.
const PCFX_SIGNATURE: &[u8] = b"PC-FX:Hu_CD-ROM";

/// Hash a PC-FX disc by its boot header and program payload.
pub fn pcfx_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Largest)?;
    let mut buffer = [0u8; 32];
    track.read_sector(0, &mut buffer)?;

    if &buffer[..PCFX_SIGNATURE.len()] != PCFX_SIGNATURE {
        // some discs carry the boot header on track 2 instead
        drop(track);
        track = ctx.open_track(path, TrackSelector::Track(2))?;
        track.read_sector(0, &mut buffer)?;

        if &buffer[..PCFX_SIGNATURE.len()] != PCFX_SIGNATURE {
            // a few PC-FX titles are mastered as PC Engine CDs
            let mut probe = [0u8; 128];
            let n = track.read_sector(1, &mut probe)?;
            if n == probe.len() && &probe[32..32 + BOOT_SIGNATURE.len()] == BOOT_SIGNATURE {
                log::debug!("PC-FX disc identifies as a PC Engine CD");
                return pce_cd_track_hash(track.as_mut());
            }
            return Err(HashError::invalid_format("Not a PC-FX CD"));
        }
    }

    let mut header = [0u8; 128];
    let n = track.read_sector(1, &mut header)?;
    if n < header.len() {
        return Err(HashError::too_small(128, n as u64));
    }

    let mut md5 = md5::Context::new();
    md5.consume(header);

    let start = read_u24_le(&header, 32);
    let count = read_u24_le(&header, 36);
    log::debug!("hashing {} program sectors from sector {}", count, start);

    let mut data = [0u8; 2048];
    for i in 0..count {
        let n = track.read_sector(start + i, &mut data)?;
        if n < data.len() {
            return Err(HashError::too_small(2048, n as u64));
        }
        md5.consume(data);
    }

    Ok(hex_digest(md5))
}
