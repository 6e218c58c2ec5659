//! High-level table writer configuration and orchestration.

use std::path::Path;

use parquet::file::properties::WriterProperties;
use tracing::info;

use crate::error::IoError;
use crate::format::FileFormat;
use crate::frame::OutputFrame;
use crate::reader::bad_delimiter;
use crate::validate::ValidationCollector;
use crate::{csv_write, parquet_write};

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level =
                    parquet::basic::ZstdLevel::try_new(3).map_err(|e| IoError::Parquet {
                        reason: e.to_string(),
                    })?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing output tables.
///
/// Compression and row group size apply to Parquet; the delimiter applies
/// to CSV.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression algorithm to use.
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
    /// Field delimiter for delimited text.
    delimiter: u8,
    /// Name written for the timestamp column.
    date_column: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
            delimiter: b',',
            date_column: "date".into(),
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the timestamp column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    // --- Accessors ---

    /// Returns the compression algorithm.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the maximum rows per row group.
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Returns the CSV field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the timestamp column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero, the
    /// delimiter is unusable, or the date column name is empty.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        if self.row_group_size == 0 {
            c.push("row_group_size must be greater than 0");
        }
        if let Some(reason) = bad_delimiter(self.delimiter) {
            c.push(reason);
        }
        if self.date_column.trim().is_empty() {
            c.push("date_column must not be empty");
        }
        c.finish()
    }
}

/// Write a frame to CSV or Parquet, chosen by the file extension.
///
/// Non-finite values are written as missing: an empty CSV field or a
/// Parquet null.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid or a
/// data column clashes with the date column,
/// [`IoError::UnsupportedFormat`] for an unknown extension, or the
/// format's error if encoding or file I/O fails.
pub fn write_frame(path: &Path, frame: &OutputFrame, config: &WriterConfig) -> Result<(), IoError> {
    config.validate()?;
    let format = FileFormat::from_path(path)?;

    if frame.column(&config.date_column).is_some() {
        return Err(IoError::Validation {
            count: 1,
            details: format!("column '{}' clashes with the date column", config.date_column),
        });
    }

    let schema = parquet_write::build_schema(frame, &config.date_column);
    let batch = parquet_write::frame_to_record_batch(frame, &schema)?;

    match format {
        FileFormat::Csv => csv_write::write_batches(path, &[batch], config.delimiter)?,
        FileFormat::Parquet => {
            let props = WriterProperties::builder()
                .set_compression(config.compression.to_parquet()?)
                .set_max_row_group_size(config.row_group_size)
                .build();
            parquet_write::write_batches(path, &[batch], &schema, props)?;
        }
    }

    info!(
        path = %path.display(),
        format = ?format,
        n_rows = frame.len(),
        n_columns = frame.columns().len(),
        "wrote table"
    );
    Ok(())
}
