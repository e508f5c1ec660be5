//! Arcade ROM hashing.
//!
//! Arcade sets are zipped collections whose contents the emulator cores
//! validate themselves, so the fingerprint is the archive's filename
//! without extension. Cores that emulate consoles through subsystem
//! folders get the folder name joined in front, so `nes/smb.zip` and a
//! standalone `smb.zip` stay distinct.

use rom_digest_core::digest::md5_buffer;
use rom_digest_core::path::filename;

/// Subsystem folder names recognized by upstream arcade frontends.
/// Comparison is case-sensitive.
const SUBSYSTEM_FOLDERS: &[&str] = &[
    "nes", "fds", "sms", "msx", "ngp", "pce", "sgx", "tg16", "coleco", "sg1000", "gamegear",
    "megadriv", "spectrum",
];

/// Hash an arcade ROM by its filename.
pub fn arcade_hash(path: &str) -> String {
    let name = filename(path);
    let base = match name.rfind('.') {
        Some(index) => &name[..index],
        None => name,
    };

    let dir_len = path.len() - name.len();
    if dir_len >= 2 {
        let parent = filename(&path[..dir_len - 1]);
        if SUBSYSTEM_FOLDERS.contains(&parent) {
            return md5_buffer(format!("{}_{}", parent, base).as_bytes());
        }
    }

    md5_buffer(base.as_bytes())
}
