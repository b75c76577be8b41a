//! Error types for frontmeta-cli

use thiserror::Error;

/// Result type alias for frontmeta-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in frontmeta-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from frontmeta-core (I/O, decoding, configuration)
    #[error(transparent)]
    Core(#[from] frontmeta_core::Error),

    /// Failed to render JSON output
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write output or read stdin
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Core(frontmeta_core::Error::config(message))
    }
}
