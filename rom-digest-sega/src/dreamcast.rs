//! Dreamcast disc hashing.
//!
//! GD-ROMs carry the 256-byte IP.BIN metadata block at the start of track 3
//! (the first high-density track), naming the boot executable at offset 96.
//! The executable normally lives in the last track; on some rips it stays
//! in track 3, so sector translation decides which handle to read from.

use rom_digest_core::cd::{append_track_sectors, CdTrack, TrackSelector};
use rom_digest_core::digest::hex_digest;
use rom_digest_core::iso9660::find_file_sector;
use rom_digest_core::{HashContext, HashError};

/// IP.BIN hardware identifier.
const IP_BIN_SIGNATURE: &[u8; 16] = b"SEGA SEGAKATANA ";

/// Offset of the space-padded boot executable name within IP.BIN.
const BOOT_NAME_OFFSET: usize = 96;

/// Maximum boot executable name length.
const BOOT_NAME_LEN: usize = 16;

/// Hash a Dreamcast disc by its IP.BIN block and boot executable.
pub fn dreamcast_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut track3 = ctx.open_track(path, TrackSelector::Track(3))?;

    let mut header = [0u8; 256];
    let n = track3.read_sector(0, &mut header)?;
    if n < header.len() {
        return Err(HashError::too_small(256, n as u64));
    }
    if &header[..16] != IP_BIN_SIGNATURE {
        return Err(HashError::invalid_format("Not a Dreamcast CD"));
    }

    let mut md5 = md5::Context::new();
    md5.consume(header);

    let name_field = &header[BOOT_NAME_OFFSET..BOOT_NAME_OFFSET + BOOT_NAME_LEN];
    let name_len = name_field
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(BOOT_NAME_LEN);
    let boot_name = std::str::from_utf8(&name_field[..name_len])
        .map_err(|_| HashError::invalid_format("Not a Dreamcast CD"))?;
    log::debug!("boot executable is {}", boot_name);

    drop(track3);
    let mut last = ctx.open_track(path, TrackSelector::Last)?;
    let mut track3 = ctx.open_track(path, TrackSelector::Track(3))?;
    let boot = find_file_sector(track3.as_mut(), boot_name)?;

    match last.to_track_sector(boot.sector) {
        Some(sector) => append_track_sectors(&mut md5, last.as_mut(), sector, boot.size)?,
        None => {
            // not in the last track: the rip keeps the executable in track 3
            let sector = track3.to_track_sector(boot.sector).ok_or_else(|| {
                HashError::invalid_format("Boot executable lies outside the data track")
            })?;
            append_track_sectors(&mut md5, track3.as_mut(), sector, boot.size)?;
        }
    }

    Ok(hex_digest(md5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use rom_digest_core::{CdAccess, CdTrack};

    struct MemoryTrack {
        data: Vec<u8>,
        first_sector: u32,
        sector_span: u32,
    }

    impl CdTrack for MemoryTrack {
        fn read_sector(&mut self, track_sector: u32, buf: &mut [u8]) -> io::Result<usize> {
            let start = track_sector as usize * 2048;
            if start >= self.data.len() {
                return Ok(0);
            }
            let n = buf.len().min(self.data.len() - start);
            buf[..n].copy_from_slice(&self.data[start..start + n]);
            Ok(n)
        }

        fn to_track_sector(&mut self, absolute_sector: u32) -> Option<u32> {
            if absolute_sector < self.first_sector
                || absolute_sector >= self.first_sector + self.sector_span
            {
                return None;
            }
            Some(absolute_sector - self.first_sector)
        }
    }

    struct MemoryDisc {
        track3: Vec<u8>,
        track3_first: u32,
        last: Vec<u8>,
        last_first: u32,
    }

    impl CdAccess for MemoryDisc {
        fn open_track(
            &self,
            _path: &str,
            selector: TrackSelector,
        ) -> io::Result<Box<dyn CdTrack>> {
            let (data, first) = match selector {
                TrackSelector::Track(3) => (self.track3.clone(), self.track3_first),
                TrackSelector::Last => (self.last.clone(), self.last_first),
                _ => return Err(io::Error::new(io::ErrorKind::NotFound, "no such track")),
            };
            let span = (data.len() / 2048) as u32;
            Ok(Box::new(MemoryTrack { data, first_sector: first, sector_span: span }))
        }
    }

    const TRACK3_FIRST: u32 = 45000;

    /// Track 3 image: IP.BIN at sector 0, ISO structures, boot executable
    /// extent pointing at `exec_sector` (disc-absolute).
    fn make_track3(exec_sector: u32, exec_size: u32) -> Vec<u8> {
        let mut data = vec![0u8; 22 * 2048];
        data[..16].copy_from_slice(IP_BIN_SIGNATURE);
        data[16..96].fill(b'D');
        data[BOOT_NAME_OFFSET..BOOT_NAME_OFFSET + BOOT_NAME_LEN]
            .copy_from_slice(b"1ST_READ.BIN    ");

        // volume descriptor at track sector 16; root directory at 45018
        let vd = 16 * 2048;
        data[vd + 156] = 34;
        data[vd + 156 + 2..vd + 156 + 5]
            .copy_from_slice(&(TRACK3_FIRST + 18).to_le_bytes()[..3]);

        let dir = 18 * 2048;
        let record_len = 33 + 14 + 1;
        data[dir] = record_len as u8;
        data[dir + 2..dir + 5].copy_from_slice(&exec_sector.to_le_bytes()[..3]);
        data[dir + 10..dir + 14].copy_from_slice(&exec_size.to_le_bytes());
        data[dir + 32] = 14;
        data[dir + 33..dir + 47].copy_from_slice(b"1ST_READ.BIN;1");

        data
    }

    fn exec_content(size: u32) -> Vec<u8> {
        (0..size).map(|i| (i % 233) as u8).collect()
    }

    fn expected_hash(track3: &[u8], content: &[u8]) -> String {
        let mut md5 = md5::Context::new();
        md5.consume(&track3[..256]);
        md5.consume(content);
        hex_digest(md5)
    }

    #[test]
    fn boot_executable_read_from_last_track() {
        let content = exec_content(5000);
        let last_first = 250000;
        let track3 = make_track3(last_first, content.len() as u32);

        let mut last = content.clone();
        last.resize(3 * 2048, 0);
        let expected = expected_hash(&track3, &content);

        let mut ctx = HashContext::new();
        ctx.set_cd_access(Box::new(MemoryDisc {
            track3,
            track3_first: TRACK3_FIRST,
            last,
            last_first,
        }));
        assert_eq!(dreamcast_hash(&ctx, "game.gdi").unwrap(), expected);
    }

    #[test]
    fn falls_back_to_track_3_when_outside_last_track() {
        let content = exec_content(3000);
        // executable stored inside track 3 itself, at track sector 19
        let mut track3 = make_track3(TRACK3_FIRST + 19, content.len() as u32);
        track3[19 * 2048..19 * 2048 + content.len()].copy_from_slice(&content);
        let expected = expected_hash(&track3, &content);

        let mut ctx = HashContext::new();
        ctx.set_cd_access(Box::new(MemoryDisc {
            track3,
            track3_first: TRACK3_FIRST,
            last: vec![0u8; 2048],
            last_first: 250000,
        }));
        assert_eq!(dreamcast_hash(&ctx, "game.gdi").unwrap(), expected);
    }

    #[test]
    fn non_dreamcast_disc_is_rejected() {
        let mut ctx = HashContext::new();
        ctx.set_cd_access(Box::new(MemoryDisc {
            track3: vec![0u8; 4096],
            track3_first: TRACK3_FIRST,
            last: vec![0u8; 2048],
            last_first: 250000,
        }));
        let err = dreamcast_hash(&ctx, "game.gdi").unwrap_err();
        assert!(matches!(err, HashError::InvalidFormat(_)));
    }
}
