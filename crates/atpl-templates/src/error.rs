//! Error types for atpl-templates

use thiserror::Error;

/// Result type alias using atpl-templates's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Template source and copy error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template not found in the active source
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Remote repository path does not exist
    #[error("Remote path not found: {path}")]
    RemoteNotFound { path: String },

    /// Remote directory listing failed
    #[error("Failed to list {path}: {reason}")]
    Listing { path: String, reason: String },

    /// Remote file download failed
    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] atpl_core::Error),
}

impl Error {
    /// Create a template not found error
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }

    /// Create a remote path not found error
    pub fn remote_not_found(path: impl Into<String>) -> Self {
        Self::RemoteNotFound { path: path.into() }
    }

    /// Create a listing error
    pub fn listing(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Listing {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a download error
    pub fn download(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}
