//! Generic file digests shared by most cartridge consoles.

use std::io::{Read, Seek, SeekFrom};

use rom_digest_core::digest::hex_digest;
use rom_digest_core::{HashContext, HashError, MAX_BUFFER_SIZE};

const CHUNK_SIZE: usize = 64 * 1024; // 64 KB

/// MD5 of a whole file, streamed in chunks and capped at
/// [`MAX_BUFFER_SIZE`] bytes.
pub fn whole_file_hash(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut reader = ctx.open_file(path)?;
    let size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(0))?;

    let mut remaining = size.min(MAX_BUFFER_SIZE);
    let mut md5 = md5::Context::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    while remaining > 0 {
        let want = remaining.min(CHUNK_SIZE as u64) as usize;
        let n = reader.read(&mut buf[..want])?;
        if n == 0 {
            break;
        }
        md5.consume(&buf[..n]);
        remaining -= n as u64;
    }

    Ok(hex_digest(md5))
}

/// Read up to [`MAX_BUFFER_SIZE`] bytes of a file and apply a buffer
/// recipe. Used when the recipe must inspect a header.
pub fn buffered_file_hash(
    ctx: &HashContext,
    path: &str,
    recipe: impl Fn(&[u8]) -> String,
) -> Result<String, HashError> {
    let mut reader = ctx.open_file(path)?;
    let size = reader.seek(SeekFrom::End(0))?.min(MAX_BUFFER_SIZE);
    reader.seek(SeekFrom::Start(0))?;

    let mut data = vec![0u8; size as usize];
    reader.read_exact(&mut data)?;
    Ok(recipe(&data))
}
