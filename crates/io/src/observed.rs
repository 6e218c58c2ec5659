//! Conversion of decoded record batches into [`Observations`].

use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use evapo_calendar::TimeIndex;
use evapo_params::Observations;
use tracing::debug;

use crate::error::IoError;
use crate::time::column_timestamps;
use crate::validate::{FieldColumn, ValidationCollector, date_position, match_fields};

/// Build an observation table from batches sharing one schema.
///
/// `names` are the header names in column order. Numeric columns are cast
/// to `Float64`; nulls and text that does not parse become `NaN`.
///
/// # Errors
///
/// - [`IoError::MissingColumn`] if the date column is absent.
/// - [`IoError::Validation`] for duplicate columns or unparseable dates.
/// - [`IoError::Calendar`] if the timestamps are not strictly ascending.
pub(crate) fn batches_to_observations(
    path: &Path,
    names: &[String],
    batches: &[RecordBatch],
    date_column: &str,
) -> Result<Observations, IoError> {
    let (date_pos, mut collector) = date_position(names, date_column);
    let Some(date_pos) = date_pos else {
        return Err(IoError::MissingColumn {
            name: date_column.to_string(),
            path: path.to_path_buf(),
        });
    };
    let (fields, field_errors) = match_fields(names, date_column);
    collector.merge(field_errors);

    let n_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    let mut timestamps = Vec::with_capacity(n_rows);
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(n_rows); fields.len()];

    let mut offset = 0;
    for batch in batches {
        read_dates(batch, date_pos, offset, &mut timestamps, &mut collector)?;
        offset += batch.num_rows();
        for (FieldColumn { position, .. }, out) in fields.iter().zip(values.iter_mut()) {
            extend_f64(batch, *position, out)?;
        }
    }
    collector.finish()?;

    let index = TimeIndex::new(timestamps)?;
    let mut obs = Observations::new(index);
    for (fc, column) in fields.iter().zip(values) {
        obs.insert(fc.field, column)?;
    }

    debug!(
        path = %path.display(),
        n_rows = obs.len(),
        n_fields = fields.len(),
        "observations read"
    );
    Ok(obs)
}

fn read_dates(
    batch: &RecordBatch,
    position: usize,
    offset: usize,
    out: &mut Vec<chrono::NaiveDateTime>,
    collector: &mut ValidationCollector,
) -> Result<(), IoError> {
    for (i, parsed) in column_timestamps(batch.column(position))?
        .into_iter()
        .enumerate()
    {
        match parsed {
            Ok(t) => out.push(t),
            Err(text) if text.is_empty() => collector.push_row(offset + i + 1, "missing date"),
            Err(text) => collector.push_row(offset + i + 1, format!("cannot parse date '{text}'")),
        }
    }
    Ok(())
}

fn extend_f64(batch: &RecordBatch, position: usize, out: &mut Vec<f64>) -> Result<(), IoError> {
    let column = batch.column(position);
    let numeric = match column.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => {
            // Surrounding whitespace would otherwise make the cast fail.
            let text = cast(column, &DataType::Utf8)?;
            let trimmed: arrow::array::StringArray = text
                .as_string::<i32>()
                .iter()
                .map(|v| v.map(str::trim))
                .collect();
            cast(&trimmed, &DataType::Float64)?
        }
        _ => cast(column, &DataType::Float64)?,
    };
    let numeric = numeric.as_primitive::<Float64Type>();
    out.extend((0..numeric.len()).map(|i| {
        if numeric.is_null(i) {
            f64::NAN
        } else {
            numeric.value(i)
        }
    }));
    Ok(())
}
