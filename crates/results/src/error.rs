//! Error types for the data-source boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining, ingesting or writing records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{path}': {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The results document is not a JSON array of records.
    #[error("malformed results in {origin}: {source}")]
    Malformed {
        /// Where the document came from.
        origin: String,
        /// The decoding error, including line and column.
        source: serde_json::Error,
    },

    /// A record decoded but violates the record invariants.
    #[error("invalid record #{index} in {origin}: {source}")]
    InvalidRecord {
        /// Where the document came from.
        origin: String,
        /// Position of the record in the document.
        index: usize,
        /// The violated invariant.
        source: queens_report_core::Error,
    },

    /// A runner log could not be turned into records.
    #[error("invalid log '{name}': {reason}")]
    InvalidLog {
        /// Log file name.
        name: String,
        /// What was missing or unreadable.
        reason: String,
    },

    /// Encoding records to JSON failed.
    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SourceError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SourceError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an [`SourceError::InvalidLog`].
    pub fn invalid_log(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SourceError::InvalidLog {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for data-source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
