//! Atari Lynx cartridge hashing.

use rom_digest_core::digest::md5_buffer;

/// LNX header length.
const HEADER_LEN: usize = 64;

/// Hash an Atari Lynx dump, skipping the 64-byte LNX header when present.
pub fn lynx_hash(buffer: &[u8]) -> String {
    if buffer.len() >= HEADER_LEN && &buffer[..5] == b"LYNX\0" {
        log::debug!("found LNX header");
        return md5_buffer(&buffer[HEADER_LEN..]);
    }
    md5_buffer(buffer)
}
