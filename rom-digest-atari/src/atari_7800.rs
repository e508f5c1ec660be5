//! Atari 7800 cartridge hashing.

use rom_digest_core::digest::md5_buffer;

/// A78 header length.
const HEADER_LEN: usize = 128;

/// Hash an Atari 7800 dump, skipping the 128-byte A78 header when present.
///
/// The header carries the string "ATARI7800" starting at byte 1.
pub fn atari_7800_hash(buffer: &[u8]) -> String {
    if buffer.len() >= HEADER_LEN && &buffer[1..10] == b"ATARI7800" {
        log::debug!("found A78 header");
        return md5_buffer(&buffer[HEADER_LEN..]);
    }
    md5_buffer(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_header() -> Vec<u8> {
        let mut header = vec![0u8; HEADER_LEN];
        header[0] = 1; // header version
        header[1..10].copy_from_slice(b"ATARI7800");
        header
    }

    #[test]
    fn a78_header_is_stripped() {
        let rom = vec![0x7Cu8; 48 * 1024];
        let mut headered = make_header();
        headered.extend_from_slice(&rom);
        assert_eq!(atari_7800_hash(&headered), md5_buffer(&rom));
    }

    #[test]
    fn headerless_dump_is_hashed_unmodified() {
        let rom = vec![0x7Cu8; 48 * 1024];
        assert_eq!(atari_7800_hash(&rom), md5_buffer(&rom));
    }

    #[test]
    fn short_buffer_with_magic_is_hashed_unmodified() {
        let mut data = vec![0u8; 32];
        data[1..10].copy_from_slice(b"ATARI7800");
        assert_eq!(atari_7800_hash(&data), md5_buffer(&data));
    }
}
