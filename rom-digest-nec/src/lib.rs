//! NEC console hashing recipes.
//!
//! - PC Engine / TurboGrafx-16 cartridges (header heuristic) and CD-ROM²
//!   discs (boot block or BOOT.BIN)
//! - PC-FX discs

pub mod pc_engine;
pub mod pcfx;

pub use pc_engine::{pce_buffer_hash, pce_cd_hash};
pub use pcfx::pcfx_hash;
