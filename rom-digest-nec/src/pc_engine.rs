//! PC Engine / TurboGrafx-16 hashing.
//!
//! HuCard dumps may carry a 512-byte header; CD-ROM² discs identify
//! themselves in the second sector of the data track and name the program
//! sectors there. Older System Card games instead boot from a BOOT.BIN at
//! the ISO-9660 root.

use rom_digest_core::cd::{append_file_content, CdTrack, TrackSelector};
use rom_digest_core::digest::{hex_digest, md5_buffer};
use rom_digest_core::iso9660::find_file_sector;
use rom_digest_core::util::read_u24_be;
use rom_digest_core::{HashContext, HashError, MAX_BUFFER_SIZE};

/// Boot-block signature, 32 bytes into sector 1.
pub(crate) const BOOT_SIGNATURE: &[u8] = b"PC Engine CD-ROM SYSTEM";

/// HuCard header length.
const HEADER_LEN: usize = 512;

/// Hash a HuCard dump, skipping the 512-byte header when present.
///
/// Headered dumps are 512 bytes past a multiple of 128 KiB; the heuristic
/// must stay byte-for-byte as is to keep existing fingerprints stable.
pub fn pce_buffer_hash(buffer: &[u8]) -> String {
    if buffer.len() % 0x20000 == HEADER_LEN {
        log::debug!("found HuCard header");
        return md5_buffer(&buffer[HEADER_LEN..]);
    }
    md5_buffer(buffer)
}

/// Hash a PC Engine CD by its boot material.
pub fn pce_cd_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track = ctx.open_track(path, TrackSelector::FirstData)?;
    pce_cd_track_hash(track.as_mut())
}

/// Hash the boot material of an already-open data track.
pub(crate) fn pce_cd_track_hash(track: &mut dyn CdTrack) -> Result<String, HashError> {
    let mut buffer = [0u8; 128];
    let n = track.read_sector(1, &mut buffer)?;
    if n < buffer.len() {
        return Err(HashError::too_small(128, n as u64));
    }

    let mut md5 = md5::Context::new();

    if &buffer[32..32 + BOOT_SIGNATURE.len()] == BOOT_SIGNATURE {
        // the disc title is the last 22 bytes of the boot block; the first
        // three bytes name the program's first sector and the fourth its
        // sector count
        md5.consume(&buffer[106..128]);

        let start = read_u24_be(&buffer, 0);
        let count = buffer[3] as u32;
        log::debug!("hashing {} program sectors from sector {}", count, start);

        let mut data = [0u8; 2048];
        for i in 0..count {
            let n = track.read_sector(start + i, &mut data)?;
            if n < data.len() {
                return Err(HashError::too_small(2048, n as u64));
            }
            md5.consume(data);
        }
    } else {
        let boot = find_file_sector(track, "BOOT.BIN")
            .map_err(|_| HashError::invalid_format("Not a PC Engine CD"))?;
        if boot.size as u64 >= MAX_BUFFER_SIZE {
            return Err(HashError::invalid_format("Not a PC Engine CD"));
        }
        append_file_content(&mut md5, track, boot.sector, boot.size)?;
    }

    Ok(hex_digest(md5))
}
