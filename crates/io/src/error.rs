//! Error types for tsalign-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the tsalign-io crate.
///
/// Covers file access, CSV format errors, row validation, and series
/// preconditions raised by tsalign-resample.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the csv crate or the file system.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a requested column is not in the CSV header.
    #[error("column '{name}' not found (available: {available})")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Comma-separated header of the file.
        available: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// A series violates a resampling precondition.
    #[error(transparent)]
    Series(#[from] tsalign_resample::ResampleError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
