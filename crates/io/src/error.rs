//! Error types for evapo-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the evapo-io crate.
///
/// Library errors from arrow and parquet are flattened into `reason`
/// strings; errors from the evapo crates are carried through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the file extension is not one of csv, txt or parquet.
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat {
        /// Path whose extension was not recognised.
        path: PathBuf,
    },

    /// Wraps an error originating from the arrow library.
    #[error("arrow error: {reason}")]
    Arrow {
        /// Description of the underlying arrow failure.
        reason: String,
    },

    /// Wraps an error originating from the Parquet library.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when a CSV file cannot be opened, read or written.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the CSV failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a timestamp cannot be parsed or is out of range.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Description of the time parsing issue.
        reason: String,
    },

    /// Wraps an error from the timestamp index.
    #[error(transparent)]
    Calendar(#[from] evapo_calendar::CalendarError),

    /// Wraps an error raised while assembling observations or parameters.
    #[error(transparent)]
    Params(#[from] evapo_params::ParamsError),
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Arrow {
            reason: e.to_string(),
        }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}
