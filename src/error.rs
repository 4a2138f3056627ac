//! Error types for doxtract
//!
//! Per-declaration extraction never fails (it degrades to `""`); these
//! errors cover the binary surface — unreadable inputs, malformed
//! manifests or databases — plus the source-cache IO failure that the
//! extractor absorbs internally.

use std::process::ExitCode;

use thiserror::Error;

/// Result type alias using [`DoxtractError`]
pub type Result<T> = std::result::Result<T, DoxtractError>;

/// All errors that doxtract can produce
#[derive(Error, Debug)]
pub enum DoxtractError {
    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// The declarations manifest could not be parsed
    #[error("Invalid declarations manifest: {message}")]
    InvalidManifest { message: String },

    /// The documentation database could not be parsed
    #[error("Invalid documentation database: {message}")]
    InvalidDatabase { message: String },

    /// Underlying IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DoxtractError {
    /// Map the error to a process exit code for the CLI
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DoxtractError::FileNotFound { .. } => ExitCode::from(2),
            DoxtractError::InvalidManifest { .. } => ExitCode::from(3),
            DoxtractError::InvalidDatabase { .. } => ExitCode::from(4),
            DoxtractError::Io(_) => ExitCode::from(5),
        }
    }
}
