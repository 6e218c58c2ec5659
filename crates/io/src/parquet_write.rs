//! Arrow batch building and low-level Parquet writing.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Date32Array, Float64Array, RecordBatch, TimestampSecondArray, UInt64Array,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use chrono::DateTime;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;
use crate::frame::{FrameColumn, OutputFrame};

/// Builds the Arrow schema for a frame.
///
/// The timestamp column comes first: `Date32` when every row is at
/// midnight, second-resolution `Timestamp` otherwise. Data columns are
/// nullable because non-finite values are written as nulls.
pub(crate) fn build_schema(frame: &OutputFrame, date_column: &str) -> Schema {
    let time_type = if frame.is_date_only() {
        DataType::Date32
    } else {
        DataType::Timestamp(TimeUnit::Second, None)
    };
    let mut fields = vec![Field::new(date_column, time_type, false)];
    fields.extend(frame.columns().iter().map(|(name, column)| {
        let dt = match column {
            FrameColumn::Float64(_) => DataType::Float64,
            FrameColumn::UInt64(_) => DataType::UInt64,
        };
        Field::new(name, dt, true)
    }));
    Schema::new(fields)
}

/// Converts a frame into a single Arrow [`RecordBatch`].
pub(crate) fn frame_to_record_batch(
    frame: &OutputFrame,
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let time_col: ArrayRef = if frame.is_date_only() {
        let epoch = DateTime::UNIX_EPOCH.date_naive();
        Arc::new(Date32Array::from_iter_values(
            frame
                .timestamps()
                .iter()
                .map(|t| (t.date() - epoch).num_days() as i32),
        ))
    } else {
        Arc::new(TimestampSecondArray::from_iter_values(
            frame.timestamps().iter().map(|t| t.and_utc().timestamp()),
        ))
    };

    let mut columns = vec![time_col];
    columns.extend(frame.columns().iter().map(|(_, column)| -> ArrayRef {
        match column {
            FrameColumn::Float64(values) => Arc::new(
                values
                    .iter()
                    .map(|v| v.is_finite().then_some(*v))
                    .collect::<Float64Array>(),
            ),
            FrameColumn::UInt64(values) => Arc::new(UInt64Array::from(values.clone())),
        }
    }));

    Ok(RecordBatch::try_new(Arc::new(schema.clone()), columns)?)
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}
