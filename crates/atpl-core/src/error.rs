//! Error types for atpl-core

use thiserror::Error;

/// Result type alias using atpl-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for atpl
#[derive(Error, Debug)]
pub enum Error {
    /// Path is not representable as UTF-8 or falls outside its base
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
