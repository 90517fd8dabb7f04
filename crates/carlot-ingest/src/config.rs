//! # Ingest Configuration
//!
//! Where to read records from, where to write rejects, and how many valid
//! records to keep.
//!
//! ## Example
//! ```rust
//! use carlot_ingest::IngestConfig;
//!
//! let config = IngestConfig::new("./data/Data.txt")
//!     .error_path("./data/ErrorFile.txt")
//!     .capacity(40);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use carlot_core::MAX_RECORDS;

use crate::error::{IngestError, IngestResult};

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "Data.txt";

/// Default error file name, relative to the working directory.
pub const DEFAULT_ERROR_FILE: &str = "ErrorFile.txt";

/// Ingest configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Path to the data file.
    pub data_path: PathBuf,

    /// Path to the error file. Truncated at the start of every run.
    /// Default: `ErrorFile.txt`
    pub error_path: PathBuf,

    /// Maximum number of valid records kept.
    /// Default: [`MAX_RECORDS`] (80)
    pub capacity: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig::new(DEFAULT_DATA_FILE)
    }
}

impl IngestConfig {
    /// Creates a configuration reading from `data_path` with default
    /// error file and capacity.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        IngestConfig {
            data_path: data_path.into(),
            error_path: PathBuf::from(DEFAULT_ERROR_FILE),
            capacity: MAX_RECORDS,
        }
    }

    /// Sets the error file path.
    pub fn error_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_path = path.into();
        self
    }

    /// Sets the capacity ceiling.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks the configuration is usable.
    ///
    /// ## Rules
    /// - Capacity must be at least 1
    /// - Data and error paths must differ (the error file is truncated)
    pub fn validate(&self) -> IngestResult<()> {
        if self.capacity == 0 {
            return Err(IngestError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }

        if self.data_path == self.error_path {
            return Err(IngestError::InvalidConfig(format!(
                "data file and error file are both '{}'",
                self.data_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IngestConfig::default();
        assert_eq!(config.data_path, PathBuf::from("Data.txt"));
        assert_eq!(config.error_path, PathBuf::from("ErrorFile.txt"));
        assert_eq!(config.capacity, 80);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = IngestConfig::default().capacity(0);
        assert!(matches!(
            config.validate(),
            Err(IngestError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_same_paths() {
        let config = IngestConfig::new("cars.txt").error_path("cars.txt");
        assert!(config.validate().is_err());
    }
}
