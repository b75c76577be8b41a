//! Error types for frontmeta-core
//!
//! Scanning itself never fails: malformed frontmatter, unknown keys and
//! unresolvable dates only leave attributes unset. The variants here cover
//! the host side of a scan (reading, decoding, configuration).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for frontmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around a document scan
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A document could not be read.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document bytes are not valid text; the scan is not attempted.
    #[error("Decode error: {message}")]
    Decode {
        /// What went wrong
        message: String,
    },

    /// Configuration file is missing, unreadable or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates an I/O error bound to the path being read.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new decode error.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` when the failure means "no metadata" for one document
    /// rather than a problem with the host setup.
    pub fn is_document_error(&self) -> bool {
        match self {
            Error::Io { .. } | Error::Decode { .. } => true,
            Error::Config { .. } => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = Error::decode("invalid utf-8 at byte 3");
        assert_eq!(err.to_string(), "Decode error: invalid utf-8 at byte 3");
        assert!(err.is_document_error());
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::config("unknown field `colour`");
        assert_eq!(err.to_string(), "Configuration error: unknown field `colour`");
        assert!(!err.is_document_error());
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(io, "/notes/a.md");
        assert!(err.to_string().contains("/notes/a.md"));
        let Error::Io { path, source } = err else {
            unreachable!("Expected Io error variant");
        };
        assert_eq!(path, PathBuf::from("/notes/a.md"));
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
