//! SNES cartridge hashing.

use rom_digest_core::digest::md5_buffer;

/// Copier header length.
const HEADER_LEN: usize = 512;

/// Hash a SNES dump, skipping the 512-byte copier header when present.
///
/// There is no magic for copier headers; a dump has one exactly when its
/// size is 512 bytes past a multiple of 8 KiB. The heuristic must stay
/// byte-for-byte as is to keep existing fingerprints stable.
pub fn snes_hash(buffer: &[u8]) -> String {
    if buffer.len() % 0x2000 == HEADER_LEN {
        log::debug!("found copier header");
        return md5_buffer(&buffer[HEADER_LEN..]);
    }
    md5_buffer(buffer)
}
