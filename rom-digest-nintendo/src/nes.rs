//! NES / Famicom cartridge and disk hashing.
//!
//! Dumps in circulation usually carry a 16-byte emulator header (iNES for
//! cartridges, fwNES for FDS disk images) that is not part of the actual
//! ROM data. The fingerprint covers only the data after that header so
//! headered and headerless dumps of the same game agree.

use rom_digest_core::digest::md5_buffer;

/// iNES header magic.
const INES_MAGIC: &[u8; 4] = b"NES\x1a";

/// fwNES FDS wrapper magic.
const FDS_MAGIC: &[u8; 4] = b"FDS\x1a";

/// Emulator header length for both formats.
const HEADER_LEN: usize = 16;

/// Hash a NES or FDS dump, skipping the emulator header when present.
pub fn nes_hash(buffer: &[u8]) -> String {
    if buffer.len() >= HEADER_LEN {
        if &buffer[..4] == INES_MAGIC {
            log::debug!("found iNES header");
            return md5_buffer(&buffer[HEADER_LEN..]);
        }
        if &buffer[..4] == FDS_MAGIC {
            log::debug!("found FDS header");
            return md5_buffer(&buffer[HEADER_LEN..]);
        }
    }
    md5_buffer(buffer)
}
