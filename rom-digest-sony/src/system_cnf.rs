//! SYSTEM.CNF boot-path extraction shared by the PS1 and PS2 recipes.

use rom_digest_core::cd::CdTrack;
use rom_digest_core::iso9660::find_file_sector;
use rom_digest_core::HashError;

/// Locate SYSTEM.CNF at the disc root and extract the boot executable's
/// on-disc path for the given key (`BOOT` or `BOOT2`).
pub(crate) fn read_boot_executable(
    track: &mut dyn CdTrack,
    key: &str,
    device_prefix: &str,
) -> Result<String, HashError> {
    let cnf = find_file_sector(track, "SYSTEM.CNF")?;
    let track_sector = track
        .to_track_sector(cnf.sector)
        .ok_or_else(|| HashError::invalid_format("SYSTEM.CNF lies outside the opened track"))?;

    let mut buffer = [0u8; 2048];
    let n = track.read_sector(track_sector, &mut buffer)?;
    let text = String::from_utf8_lossy(&buffer[..n]);

    boot_executable(&text, key, device_prefix).ok_or_else(|| {
        HashError::invalid_format(format!("No {} entry found in SYSTEM.CNF", key))
    })
}

/// Scan SYSTEM.CNF text for `key`, then parse `= <device_prefix>\NAME;1`
/// into the bare on-disc path.
///
/// The key comparison is case-sensitive; the returned token stops at the
/// first whitespace or `;`, so the version suffix is excluded.
fn boot_executable(text: &str, key: &str, device_prefix: &str) -> Option<String> {
    for (index, _) in text.match_indices(key) {
        if let Some(name) = parse_boot_value(&text[index + key.len()..], device_prefix) {
            return Some(name);
        }
    }
    None
}

fn parse_boot_value(rest: &str, device_prefix: &str) -> Option<String> {
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=')?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(device_prefix).unwrap_or(rest);
    let rest = rest.strip_prefix('\\').unwrap_or(rest);
    let end = rest
        .find(|c: char| c.is_whitespace() || c == ';')
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_boot_line() {
        let cnf = "BOOT = cdrom:\\SLUS_012.34;1\r\nTCB = 4\r\n";
        assert_eq!(
            boot_executable(cnf, "BOOT", "cdrom:"),
            Some("SLUS_012.34".to_string())
        );
    }

    #[test]
    fn boot2_line_with_device_prefix() {
        let cnf = "BOOT2 = cdrom0:\\SLPS_123.45;1\r\nVER = 1.00\r\n";
        assert_eq!(
            boot_executable(cnf, "BOOT2", "cdrom0:"),
            Some("SLPS_123.45".to_string())
        );
    }

    #[test]
    fn boot2_key_is_not_mistaken_for_boot() {
        // the BOOT2 occurrence fails BOOT's `=` check ('2' follows), and
        // scanning continues to the real BOOT line
        let cnf = "BOOT2 = cdrom0:\\WRONG.ELF;1\r\nBOOT = cdrom:\\RIGHT.EXE;1\r\n";
        assert_eq!(
            boot_executable(cnf, "BOOT", "cdrom:"),
            Some("RIGHT.EXE".to_string())
        );
    }

    #[test]
    fn missing_device_prefix_is_tolerated() {
        let cnf = "BOOT=MAIN.EXE;1\n";
        assert_eq!(
            boot_executable(cnf, "BOOT", "cdrom:"),
            Some("MAIN.EXE".to_string())
        );
    }

    #[test]
    fn subdirectory_path_is_preserved() {
        let cnf = "BOOT = cdrom:\\BIN\\GAME.EXE;1\n";
        assert_eq!(
            boot_executable(cnf, "BOOT", "cdrom:"),
            Some("BIN\\GAME.EXE".to_string())
        );
    }

    #[test]
    fn key_is_case_sensitive() {
        let cnf = "boot = cdrom:\\SLUS_012.34;1\n";
        assert_eq!(boot_executable(cnf, "BOOT", "cdrom:"), None);
    }

    #[test]
    fn missing_key_returns_none() {
        let cnf = "TCB = 4\nEVENT = 10\n";
        assert_eq!(boot_executable(cnf, "BOOT", "cdrom:"), None);
    }
}
