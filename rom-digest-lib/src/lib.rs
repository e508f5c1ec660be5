//! ROM and disc-image fingerprinting.
//!
//! Computes a canonical content fingerprint (MD5, rendered as 32 lowercase
//! hex digits) for game dumps. Each console has its own recipe: raw file
//! digest, copier-header stripping, disc-filesystem boot executable
//! extraction, or filename-only hashing for archived arcade sets.
//!
//! Entry points: [`hash_from_file`] / [`hash_from_buffer`] when the console
//! is known, [`HashIterator`] to probe candidate consoles for an ambiguous
//! path.

// Re-export everything from rom-digest-core so callers need one import.
pub use rom_digest_core::*;

pub mod arcade;
pub mod dispatch;
pub mod hasher;
pub mod iterator;
pub mod playlist;

pub use dispatch::{hash_from_buffer, hash_from_file, hash_from_playlist};
pub use iterator::HashIterator;
