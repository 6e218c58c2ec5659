//! File format detection by extension.

use std::path::Path;

use crate::error::IoError;

/// The on-disk layouts read and written by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text with a header row (`.csv` or `.txt`).
    Csv,
    /// Apache Parquet (`.parquet` or `.pq`).
    Parquet,
}

impl FileFormat {
    /// Pick the format from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv" | "txt") => Ok(Self::Csv),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            _ => Err(IoError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
