//! `.m3u` playlist handling.
//!
//! Multi-disc games ship as playlists naming their disc images. Hashing a
//! playlist means hashing the first disc it references.

use std::io::Read;

use rom_digest_core::path::{filename, is_absolute};
use rom_digest_core::{HashContext, HashError};

/// At most this many bytes of the playlist are examined.
const MAX_PLAYLIST_LEN: usize = 1023;

/// Resolve the first disc path named by a playlist.
///
/// Comment (`#`) and blank lines are skipped, trailing whitespace is
/// trimmed, and relative entries are resolved against the playlist's
/// directory.
pub fn first_entry(ctx: &HashContext, path: &str) -> Result<String, HashError> {
    let mut reader = ctx.open_file(path)?;

    let mut buf = [0u8; MAX_PLAYLIST_LEN];
    let mut len = 0;
    loop {
        let n = reader.read(&mut buf[len..])?;
        if n == 0 {
            break;
        }
        len += n;
        if len == buf.len() {
            break;
        }
    }

    let text = String::from_utf8_lossy(&buf[..len]);
    for line in text.lines() {
        if line.starts_with('#') {
            continue;
        }
        let entry = line.trim_end();
        if entry.is_empty() {
            continue;
        }

        if is_absolute(entry) {
            return Ok(entry.to_string());
        }
        let dir_len = path.len() - filename(path).len();
        return Ok(format!("{}{}", &path[..dir_len], entry));
    }

    Err(HashError::invalid_format(format!(
        "Playlist contained no disc entries: {}",
        path
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_playlist(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn first_line_wins() {
        let dir = tempfile::tempdir().unwrap();
        let m3u = write_playlist(&dir, "game.m3u", "disc1.chd\ndisc2.chd\n");

        let ctx = HashContext::new();
        let entry = first_entry(&ctx, &m3u).unwrap();
        assert_eq!(entry, format!("{}/disc1.chd", dir.path().to_str().unwrap()));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let m3u = write_playlist(&dir, "game.m3u", "# my playlist\r\n\r\ndisc1.cue\r\n");

        let ctx = HashContext::new();
        let entry = first_entry(&ctx, &m3u).unwrap();
        assert!(entry.ends_with("disc1.cue"));
        assert!(!entry.contains('\r'));
    }

    #[test]
    fn absolute_entries_are_kept_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let m3u = write_playlist(&dir, "game.m3u", "/discs/game/disc1.cue\n");

        let ctx = HashContext::new();
        assert_eq!(first_entry(&ctx, &m3u).unwrap(), "/discs/game/disc1.cue");
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let m3u = write_playlist(&dir, "game.m3u", "# nothing here\n\n");

        let ctx = HashContext::new();
        let err = first_entry(&ctx, &m3u).unwrap_err();
        assert!(matches!(err, HashError::InvalidFormat(_)));
    }
}
