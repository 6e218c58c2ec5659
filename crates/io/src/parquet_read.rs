//! Low-level Parquet reading.

use std::path::Path;

use arrow::array::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads the column names and all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(
    path: &Path,
    batch_size: usize,
) -> Result<(Vec<String>, Vec<RecordBatch>), IoError> {
    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?.with_batch_size(batch_size);
    let names = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> =
        reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parquet {
                reason: e.to_string(),
            })?;

    Ok((names, batches))
}
