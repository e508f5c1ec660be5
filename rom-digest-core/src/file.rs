//! Pluggable file I/O backend.

use std::fs::File;
use std::io;

use crate::ReadSeek;

/// Backend that opens files for the hashing recipes.
///
/// Install a custom implementation on a [`crate::HashContext`] to read from
/// archives, network shares, or frontends with virtual filesystems. Handles
/// are released by `Drop`.
pub trait FileAccess: Send + Sync {
    fn open(&self, path: &str) -> io::Result<Box<dyn ReadSeek>>;
}

/// Default backend mapping straight onto `std::fs`.
pub struct StdFileAccess;

impl FileAccess for StdFileAccess {
    fn open(&self, path: &str) -> io::Result<Box<dyn ReadSeek>> {
        Ok(Box::new(File::open(path)?))
    }
}
