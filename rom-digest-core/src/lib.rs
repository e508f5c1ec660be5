//! Core plumbing for ROM fingerprinting.
//!
//! This crate holds everything the per-console recipe crates share: the
//! console registry, the error type, the pluggable file and CD reader
//! backends, the hashing context, path helpers, MD5 helpers, and the
//! ISO-9660 file locator.

use std::io::{Read, Seek};

pub mod cd;
pub mod console;
pub mod context;
pub mod digest;
pub mod error;
pub mod file;
pub mod iso9660;
pub mod path;
pub mod util;

pub use cd::{CdAccess, CdTrack, TrackSelector};
pub use console::{Console, ConsoleParseError};
pub use context::HashContext;
pub use error::HashError;
pub use file::{FileAccess, StdFileAccess};
pub use iso9660::DiscFile;

/// Upper bound on the number of bytes any recipe feeds to MD5.
///
/// Caps both memory use and hashing time for oversized inputs; every
/// recipe honors it.
pub const MAX_BUFFER_SIZE: u64 = 64 * 1024 * 1024;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}
