//! Nintendo console hashing recipes.
//!
//! - NES / Famicom Disk System (iNES and fwNES header stripping)
//! - SNES (copier header stripping)
//! - Nintendo DS (executable + icon digest)

pub mod ds;
pub mod nes;
pub mod snes;

pub use ds::ds_hash;
pub use nes::nes_hash;
pub use snes::snes_hash;
