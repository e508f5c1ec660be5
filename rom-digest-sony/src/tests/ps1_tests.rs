use super::*;
use std::io;

use rom_digest_core::digest::hex_digest;
use rom_digest_core::{CdAccess, CdTrack, HashContext, HashError, TrackSelector};

struct MemoryTrack {
    data: Vec<u8>,
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
        Some(absolute_sector)
    }
}

struct MemoryDisc {
    track1: Vec<u8>,
}

impl CdAccess for MemoryDisc {
    fn open_track(&self, _path: &str, selector: TrackSelector) -> io::Result<Box<dyn CdTrack>> {
        match selector {
            TrackSelector::Track(1) => Ok(Box::new(MemoryTrack { data: self.track1.clone() })),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, "no such track")),
        }
    }
}

/// Build a disc image with SYSTEM.CNF at sector 19 and the boot executable
/// at sector 20.
fn make_disc(cnf: &str, exec_record_name: &[u8], exec_content: &[u8]) -> HashContext {
    let sectors = 21 + exec_content.len().div_ceil(2048);
    let mut data = vec![0u8; sectors * 2048];

    let vd = 16 * 2048;
    data[vd + 156] = 34;
    data[vd + 156 + 2..vd + 156 + 5].copy_from_slice(&18u32.to_le_bytes()[..3]);

    let dir = 18 * 2048;
    let mut pos = dir;
    for (name, sector, size) in [
        (b"SYSTEM.CNF;1".as_slice(), 19u32, cnf.len() as u32),
        (exec_record_name, 20u32, exec_content.len() as u32),
    ] {
        let record_len = 33 + name.len() + 1;
        data[pos] = record_len as u8;
        data[pos + 2..pos + 5].copy_from_slice(&sector.to_le_bytes()[..3]);
        data[pos + 10..pos + 14].copy_from_slice(&size.to_le_bytes());
        data[pos + 32] = name.len() as u8;
        data[pos + 33..pos + 33 + name.len()].copy_from_slice(name);
        pos += record_len;
    }

    data[19 * 2048..19 * 2048 + cnf.len()].copy_from_slice(cnf.as_bytes());
    data[20 * 2048..20 * 2048 + exec_content.len()].copy_from_slice(exec_content);

    let mut ctx = HashContext::new();
    ctx.set_cd_access(Box::new(MemoryDisc { track1: data }));
    ctx
}

fn expected_hash(exec_name: &str, hashed_content: &[u8]) -> String {
    let mut md5 = md5::Context::new();
    md5.consume(exec_name.as_bytes());
    md5.consume(hashed_content);
    hex_digest(md5)
}

#[test]
fn hashes_name_and_executable_contents() {
    let content: Vec<u8> = (0..3000u32).map(|i| (i % 249) as u8).collect();
    let ctx = make_disc(
        "BOOT = cdrom:\\SLUS_012.34;1\r\n",
        b"SLUS_012.34;1",
        &content,
    );
    assert_eq!(
        ps1_hash(&ctx, "game.cue").unwrap(),
        expected_hash("SLUS_012.34", &content)
    );
}

#[test]
fn psx_exe_header_overrides_declared_size() {
    // header declares 1000 code bytes; record says the file is longer
    let mut content = vec![0u8; 2048 + 1000 + 500];
    content[..8].copy_from_slice(b"PS-X EXE");
    content[28..32].copy_from_slice(&1000u32.to_le_bytes());
    for (i, byte) in content.iter_mut().enumerate().skip(32) {
        *byte = (i % 247) as u8;
    }

    let ctx = make_disc(
        "BOOT = cdrom:\\SLUS_012.34;1\r\n",
        b"SLUS_012.34;1",
        &content,
    );
    assert_eq!(
        ps1_hash(&ctx, "game.cue").unwrap(),
        expected_hash("SLUS_012.34", &content[..2048 + 1000])
    );
}

#[test]
fn missing_boot_entry_is_rejected() {
    let ctx = make_disc("TCB = 4\r\n", b"SLUS_012.34;1", &[0u8; 100]);
    let err = ps1_hash(&ctx, "game.cue").unwrap_err();
    assert!(matches!(err, HashError::InvalidFormat(_)));
}

#[test]
fn missing_executable_is_reported() {
    let ctx = make_disc(
        "BOOT = cdrom:\\MISSING.EXE;1\r\n",
        b"SLUS_012.34;1",
        &[0u8; 100],
    );
    let err = ps1_hash(&ctx, "game.cue").unwrap_err();
    assert!(matches!(err, HashError::FileNotFound(_)));
}
