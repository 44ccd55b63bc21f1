//! Shared error types for the aggregation engine and its callers.
//!
//! Word-level oddities never surface here: odd tokens degrade into low-value
//! entries that the ranker filters out. Errors are reserved for configuration
//! problems, caller-side I/O, malformed input records, and contract violations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wordfreqs operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration values failed validation; every detected problem is kept
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// Configuration file could not be parsed
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A record in an input corpus could not be decoded
    #[error("Malformed input in {}:{line}: {message}", path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The morphological merge ran more than once on the same table
    #[error("Morphological merge already applied to this table")]
    MergeAlreadyApplied,
}

impl Error {
    /// Create a file system error for a path.
    pub fn io_with_path(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

/// Result type alias for wordfreqs operations
pub type Result<T> = std::result::Result<T, Error>;
