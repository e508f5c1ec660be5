//! Panasonic console hashing recipes.
//!
//! - 3DO Interactive Multiplayer (Opera filesystem boot executable)

pub mod threedo;

pub use threedo::threedo_hash;
