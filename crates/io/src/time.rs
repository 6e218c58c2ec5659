//! Timestamp parsing for the date column.

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, TimeUnit, TimestampMillisecondType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::IoError;

/// Text layouts accepted for the date column, tried in order.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse one text timestamp.
///
/// A bare `%Y-%m-%d` date reads as midnight.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(chrono::NaiveTime::MIN));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

/// Convert a date column to timestamps.
///
/// Null or unparseable entries come back as `Ok(Err(text))` so the caller
/// can report them by row.
///
/// # Errors
///
/// Returns [`IoError::InvalidTime`] if the column type cannot hold a date.
pub(crate) fn column_timestamps(
    array: &ArrayRef,
) -> Result<Vec<Result<NaiveDateTime, String>>, IoError> {
    match array.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => {
            let text = cast(array, &DataType::Utf8)?;
            let text = text.as_string::<i32>();
            Ok(text
                .iter()
                .map(|v| match v {
                    Some(s) => parse_timestamp(s).ok_or_else(|| s.to_string()),
                    None => Err(String::new()),
                })
                .collect())
        }
        DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => {
            let millis = cast(array, &DataType::Timestamp(TimeUnit::Millisecond, None))?;
            let millis = millis.as_primitive::<TimestampMillisecondType>();
            Ok((0..millis.len())
                .map(|i| {
                    if millis.is_null(i) {
                        return Err(String::new());
                    }
                    let ms = millis.value(i);
                    DateTime::from_timestamp_millis(ms)
                        .map(|dt| dt.naive_utc())
                        .ok_or_else(|| ms.to_string())
                })
                .collect())
        }
        other => Err(IoError::InvalidTime {
            reason: format!("date column has type {other}"),
        }),
    }
}
