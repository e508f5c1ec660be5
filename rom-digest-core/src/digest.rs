//! MD5 digest helpers.
//!
//! The fingerprint format is fixed: a 128-bit MD5 digest rendered as 32
//! lowercase hexadecimal digits.

use crate::MAX_BUFFER_SIZE;

/// Render a finished MD5 state as 32 lowercase hex digits.
pub fn hex_digest(md5: md5::Context) -> String {
    format!("{:x}", md5.compute())
}

/// MD5 of at most [`MAX_BUFFER_SIZE`] bytes of `data`.
pub fn md5_buffer(data: &[u8]) -> String {
    let len = data.len().min(MAX_BUFFER_SIZE as usize);
    let mut md5 = md5::Context::new();
    md5.consume(&data[..len]);
    hex_digest(md5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_md5_of_empty_string() {
        assert_eq!(md5_buffer(&[]), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn digest_is_32_lowercase_hex_chars() {
        let hash = md5_buffer(b"some rom data");
        assert_eq!(hash.len(), 32);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn oversized_buffer_is_capped() {
        let capped = vec![0u8; MAX_BUFFER_SIZE as usize];
        let oversized = vec![0u8; MAX_BUFFER_SIZE as usize + 16];
        assert_eq!(md5_buffer(&oversized), md5_buffer(&capped));
    }
}
