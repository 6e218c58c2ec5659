//! High-level observation reader configuration and orchestration.

use std::path::Path;

use evapo_params::Observations;
use tracing::info;

use crate::error::IoError;
use crate::format::FileFormat;
use crate::observed::batches_to_observations;
use crate::{csv_read, parquet_read};

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading observation tables.
///
/// Column names other than the date column are matched against the
/// observation field names (`T_max`, `RH_mean`, `U_z`, ...). The
/// [`Default`] reads a comma-separated file with a `date` column.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Name of the timestamp column.
    date_column: String,
    /// Field delimiter for delimited text.
    delimiter: u8,
    /// Rows decoded per record batch.
    batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".into(),
            delimiter: b',',
            batch_size: 8192,
        }
    }
}

impl ReaderConfig {
    /// Set the name of the timestamp column.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the field delimiter used for delimited text.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the number of rows decoded per batch.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    // --- Accessors ---

    /// Returns the timestamp column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every problem found.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = crate::validate::ValidationCollector::new();
        if self.date_column.trim().is_empty() {
            c.push("date_column must not be empty");
        }
        if let Some(reason) = bad_delimiter(self.delimiter) {
            c.push(reason);
        }
        if self.batch_size == 0 {
            c.push("batch_size must be greater than 0");
        }
        c.finish()
    }
}

/// Describe why `delimiter` cannot separate fields, if it cannot.
pub(crate) fn bad_delimiter(delimiter: u8) -> Option<String> {
    if !delimiter.is_ascii() || matches!(delimiter, b'"' | b'\n' | b'\r') {
        Some(format!(
            "delimiter {:?} cannot separate fields",
            char::from(delimiter)
        ))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// read_observations
// ---------------------------------------------------------------------------

/// Read an observation table from a CSV or Parquet file.
///
/// The format follows the extension: `.csv` / `.txt` for delimited text,
/// `.parquet` / `.pq` for Parquet. Unrecognised columns are skipped and
/// missing values of any kind read as `NaN`.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or unreadable, the date column
/// is absent, dates cannot be parsed, columns are duplicated, or the
/// timestamps are not strictly ascending.
pub fn read_observations(path: &Path, config: &ReaderConfig) -> Result<Observations, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = FileFormat::from_path(path)?;
    let (names, batches) = match format {
        FileFormat::Csv => csv_read::read_batches(path, config.delimiter, config.batch_size)?,
        FileFormat::Parquet => parquet_read::read_batches(path, config.batch_size)?,
    };

    let obs = batches_to_observations(path, &names, &batches, &config.date_column)?;

    info!(
        path = %path.display(),
        format = ?format,
        n_rows = obs.len(),
        fields = ?obs.fields().map(|f| f.name()).collect::<Vec<_>>(),
        "read observations"
    );

    Ok(obs)
}
