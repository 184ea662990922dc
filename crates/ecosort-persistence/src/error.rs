//! Error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in flat-file operations.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Failed to create or open a file.
    #[error("failed to open {path}: {source}")]
    Open {
        /// The file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to create a parent directory.
    #[error("failed to create directory {path}: {source}")]
    Directory {
        /// The directory path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing an append failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
