//! Atari console hashing recipes.
//!
//! - Atari 7800 (A78 header stripping)
//! - Atari Lynx (LNX header stripping)

pub mod atari_7800;
pub mod lynx;

pub use atari_7800::atari_7800_hash;
pub use lynx::lynx_hash;
