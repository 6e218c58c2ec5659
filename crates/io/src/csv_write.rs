//! Low-level CSV writing.

use std::fs::File;
use std::path::Path;

use arrow::array::RecordBatch;
use arrow::csv::WriterBuilder;

use crate::error::IoError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes record batches as delimited text with a header row.
///
/// Nulls are written as empty fields.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created, or
/// [`IoError::Arrow`] if a batch cannot be encoded.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    delimiter: u8,
) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .with_delimiter(delimiter)
        .with_timestamp_format(TIMESTAMP_FORMAT.to_string())
        .build(file);

    for batch in batches {
        writer.write(batch)?;
    }
    Ok(())
}
