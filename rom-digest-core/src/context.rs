//! Hashing context: the pluggable backends threaded through every recipe.

use std::io::{Seek, SeekFrom};

use crate::cd::{CdAccess, CdTrack, TrackSelector};
use crate::error::HashError;
use crate::file::{FileAccess, StdFileAccess};
use crate::ReadSeek;

/// Holds the file and CD backends the recipes read from.
///
/// A fresh context carries the default `std::fs` file backend and no CD
/// backend; disc recipes fail with [`HashError::NoCdReader`] until one is
/// installed. Recipes only read the context, so installation must happen
/// before hashing begins.
pub struct HashContext {
    file: Box<dyn FileAccess>,
    cd: Option<Box<dyn CdAccess>>,
}

impl Default for HashContext {
    fn default() -> Self {
        Self::new()
    }
}

impl HashContext {
    /// Create a context with the default file backend and no CD backend.
    pub fn new() -> Self {
        Self {
            file: Box::new(StdFileAccess),
            cd: None,
        }
    }

    /// Replace the file I/O backend.
    pub fn set_file_access(&mut self, file: Box<dyn FileAccess>) {
        self.file = file;
    }

    /// Install a CD image backend.
    pub fn set_cd_access(&mut self, cd: Box<dyn CdAccess>) {
        self.cd = Some(cd);
    }

    /// Open a file through the installed backend.
    pub fn open_file(&self, path: &str) -> Result<Box<dyn ReadSeek>, HashError> {
        self.file
            .open(path)
            .map_err(|_| HashError::OpenFailed(path.to_string()))
    }

    /// Size of a file in bytes, via the installed backend.
    pub fn file_size(&self, path: &str) -> Result<u64, HashError> {
        let mut reader = self.open_file(path)?;
        Ok(reader.seek(SeekFrom::End(0))?)
    }

    /// Open a track of a disc image through the installed CD backend.
    pub fn open_track(
        &self,
        path: &str,
        selector: TrackSelector,
    ) -> Result<Box<dyn CdTrack>, HashError> {
        let cd = self.cd.as_deref().ok_or(HashError::NoCdReader)?;
        cd.open_track(path, selector)
            .map_err(|_| HashError::OpenFailed(format!("{} of {}", selector, path)))
    }
}
