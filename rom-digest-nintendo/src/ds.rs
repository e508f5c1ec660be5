//! Nintendo DS cartridge hashing.
//!
//! DS dumps are too large to hash whole and are padded to power-of-two
//! sizes, so the fingerprint covers the parts that identify the game: the
//! first 0x160 bytes of the header, the ARM9 and ARM7 code blocks, and the
//! icon/title block.

use std::io::{Read, Seek, SeekFrom};

use rom_digest_core::digest::hex_digest;
use rom_digest_core::util::read_u32_le;
use rom_digest_core::{HashContext, HashError};

/// Header length; offsets below are relative to its start.
const HEADER_LEN: usize = 512;

/// Bytes of the header included in the digest.
const HASHED_HEADER_LEN: usize = 0x160;

/// Icon/title block length.
const ICON_LEN: usize = 0xA00;

/// Combined ARM9+ARM7 code size beyond which the header is considered
/// corrupt.
const MAX_CODE_SIZE: u64 = 16 * 1024 * 1024;

/// Hash a Nintendo DS dump.
pub fn ds_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut file = ctx.open_file(path)?;

    let mut header = [0u8; HEADER_LEN];
    file.read_exact(&mut header)?;

    // SuperCard DSTWO dumps wrap the cartridge in a 512-byte loader
    let mut base = 0u64;
    if header[..4] == [0x2E, 0x00, 0x00, 0xEA] && header[0xB0..0xB4] == [0x44, 0x46, 0x96, 0x00] {
        log::debug!("found SuperCard header");
        base = HEADER_LEN as u64;
        file.seek(SeekFrom::Start(base))?;
        file.read_exact(&mut header)?;
    }

    let arm9_addr = read_u32_le(&header, 0x20);
    let arm9_size = read_u32_le(&header, 0x2C);
    let arm7_addr = read_u32_le(&header, 0x30);
    let arm7_size = read_u32_le(&header, 0x3C);
    let icon_addr = read_u32_le(&header, 0x68);

    if arm9_size as u64 + arm7_size as u64 > MAX_CODE_SIZE {
        return Err(HashError::invalid_format(format!(
            "Not a Nintendo DS ROM: implausible ARM9 ({} bytes) + ARM7 ({} bytes) code size",
            arm9_size, arm7_size
        )));
    }

    let mut md5 = md5::Context::new();
    md5.consume(&header[..HASHED_HEADER_LEN]);

    let mut code = vec![0u8; arm9_size as usize];
    file.seek(SeekFrom::Start(base + arm9_addr as u64))?;
    file.read_exact(&mut code)?;
    md5.consume(&code);

    code.resize(arm7_size as usize, 0);
    file.seek(SeekFrom::Start(base + arm7_addr as u64))?;
    file.read_exact(&mut code)?;
    md5.consume(&code);

    // the icon/title block is a fixed size; zero-pad if the file ends early
    let mut icon = [0u8; ICON_LEN];
    file.seek(SeekFrom::Start(base + icon_addr as u64))?;
    let mut filled = 0;
    loop {
        let n = file.read(&mut icon[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == icon.len() {
            break;
        }
    }
    md5.consume(icon);

    Ok(hex_digest(md5))
}
