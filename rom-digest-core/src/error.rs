use thiserror::Error;

use crate::console::Console;

/// Errors that can occur while computing a fingerprint.
#[derive(Debug, Error)]
pub enum HashError {
    /// I/O error from a backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file or track could not be opened
    #[error("Could not open {0}")]
    OpenFailed(String),

    /// Expected magic/signature absent, or a declared size is implausible
    #[error("{0}")]
    InvalidFormat(String),

    /// A backend returned fewer bytes than a critical read needed
    #[error("Read truncated: expected at least {expected} bytes, got {actual}")]
    TooSmall { expected: u64, actual: u64 },

    /// A required on-disc file is missing
    #[error("Could not locate {0}")]
    FileNotFound(String),

    /// The console is not handled by the dispatched entry point
    #[error("Unsupported console: {0}")]
    UnsupportedConsole(Console),

    /// A CD operation was invoked without a CD backend installed
    #[error("No CD reader backend installed")]
    NoCdReader,
}

impl HashError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn file_not_found(name: impl Into<String>) -> Self {
        Self::FileNotFound(name.into())
    }

    pub fn too_small(expected: u64, actual: u64) -> Self {
        Self::TooSmall { expected, actual }
    }
}
