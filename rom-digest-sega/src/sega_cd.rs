//! Sega CD / Mega CD and Saturn disc hashing.
//!
//! Both systems put a 512-byte boot header at the very start of track 1,
//! and that header (region, serial, title, boot code pointers) is unique
//! per release, so the fingerprint is the digest of exactly those bytes.

use rom_digest_core::digest::md5_buffer;
use rom_digest_core::{CdTrack, HashContext, HashError, TrackSelector};

/// Sega CD header identifier (padded to 16 bytes).
const SEGA_CD_SIGNATURE: &[u8; 16] = b"SEGADISCSYSTEM  ";

/// Saturn header identifier.
const SATURN_SIGNATURE: &[u8; 16] = b"SEGA SEGASATURN ";

/// Hash a Sega CD or Saturn disc by its 512-byte boot header.
pub fn sega_cd_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::Track(1))?;

    let mut header = [0u8; 512];
    let n = track.read_sector(0, &mut header)?;
    if n < header.len() {
        return Err(HashError::too_small(512, n as u64));
    }

    if &header[..16] == SEGA_CD_SIGNATURE {
        log::debug!("found Sega CD header");
    } else if &header[..16] == SATURN_SIGNATURE {
        log::debug!("found Saturn header");
    } else {
        return Err(HashError::invalid_format("Not a Sega CD or Saturn disc"));
    }

    Ok(md5_buffer(&header))
}
