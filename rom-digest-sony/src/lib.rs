//! Sony console hashing recipes.
//!
//! - PlayStation (SYSTEM.CNF `BOOT` executable digest)
//! - PlayStation 2 (SYSTEM.CNF `BOOT2` ELF digest)

pub mod ps1;
pub mod ps2;
mod system_cnf;

pub use ps1::ps1_hash;
pub use ps2::ps2_hash;
