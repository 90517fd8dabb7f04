//! # Ingest Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IngestError (this module) ← Adds the path and which side failed       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI prints "ERROR: ..." and exits before any menu is shown            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad records are NOT errors here; they go to the error file and ingest
//! carries on. Everything in this enum ends the run.

use std::io;
use std::path::{Path, PathBuf};

use carlot_core::CoreError;
use thiserror::Error;

/// Fatal ingest errors.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The data file could not be opened.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - File permissions issue
    #[error("Unable to open '{}': {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data source has no content at all.
    #[error("'{name}' is empty. No data to process")]
    EmptyInput { name: String },

    /// Reading the data file failed partway (I/O error, invalid UTF-8).
    #[error("Failed reading input at line {line}: {source}")]
    InputRead {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// The error file could not be created or opened for reading.
    #[error("Unable to open '{}': {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a rejected record to the error file failed.
    #[error("Failed writing to error file: {0}")]
    SinkWrite(#[source] io::Error),

    /// Reading the error file back failed.
    #[error("Failed reading error file: {0}")]
    SinkRead(#[source] io::Error),

    /// Configuration can't be used (e.g. zero capacity).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The record store refused a car.
    #[error(transparent)]
    Store(#[from] CoreError),
}

impl IngestError {
    /// Creates an InputUnavailable error for a path.
    pub fn input_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        IngestError::InputUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a SinkUnavailable error for a path.
    pub fn sink_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
        IngestError::SinkUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = IngestError::EmptyInput {
            name: "Data.txt".to_string(),
        };
        assert_eq!(err.to_string(), "'Data.txt' is empty. No data to process");

        let err = IngestError::input_unavailable(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "Unable to open 'missing.txt': not found");
    }
}
