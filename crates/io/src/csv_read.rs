//! Low-level CSV reading.
//!
//! Every column is read as text; numeric conversion happens later through
//! an arrow cast so CSV and Parquet share one path.

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use arrow::array::RecordBatch;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::datatypes::{DataType, Field, Schema};

use crate::error::IoError;

fn csv_error(e: impl std::fmt::Display) -> IoError {
    IoError::Csv {
        reason: e.to_string(),
    }
}

/// Reads the header names, trimmed of whitespace and a leading BOM.
///
/// Quoting follows the same rules as the record decoder, so a quoted name
/// containing the delimiter stays one column.
fn read_header(file: &mut File, delimiter: u8) -> Result<Vec<String>, IoError> {
    let (schema, _) = Format::default()
        .with_header(true)
        .with_delimiter(delimiter)
        .infer_schema(BufReader::new(&mut *file), Some(0))?;
    Ok(schema
        .fields()
        .iter()
        .map(|f| f.name().trim_start_matches('\u{feff}').trim().to_string())
        .collect())
}

/// Reads the header and all record batches from a delimited text file.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be read or has no header,
/// or [`IoError::Arrow`] if a row cannot be decoded.
pub(crate) fn read_batches(
    path: &Path,
    delimiter: u8,
    batch_size: usize,
) -> Result<(Vec<String>, Vec<RecordBatch>), IoError> {
    let mut file = File::open(path).map_err(csv_error)?;

    let names = read_header(&mut file, delimiter)?;
    if names.iter().all(String::is_empty) {
        return Err(csv_error("missing header row"));
    }

    let schema = Schema::new(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                // arrow requires a name; blank headers are never matched.
                let name = if n.is_empty() {
                    format!("column_{i}")
                } else {
                    n.clone()
                };
                Field::new(name, DataType::Utf8, true)
            })
            .collect::<Vec<_>>(),
    );

    file.seek(SeekFrom::Start(0)).map_err(csv_error)?;
    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_delimiter(delimiter)
        .with_batch_size(batch_size)
        .build(file)?;

    let batches = reader.collect::<Result<Vec<_>, _>>()?;
    Ok((names, batches))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn header_of(text: &str, delimiter: u8) -> Vec<String> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.csv");
        fs::write(&path, text).unwrap();
        read_header(&mut File::open(&path).unwrap(), delimiter).unwrap()
    }

    #[test]
    fn header_is_trimmed_and_unquoted() {
        assert_eq!(
            header_of("\u{feff}date,\"T_max\", T_min \r\n1,2,3\n", b','),
            vec!["date", "T_max", "T_min"]
        );
    }

    #[test]
    fn header_with_semicolons() {
        assert_eq!(header_of("date;U_z\n", b';'), vec!["date", "U_z"]);
    }

    #[test]
    fn quoted_delimiter_stays_one_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.csv");
        fs::write(&path, "date,\"note, free text\",T_max\n2020-01-01,a,1\n").unwrap();
        let (names, batches) = read_batches(&path, b',', 16).unwrap();
        assert_eq!(names, vec!["date", "note, free text", "T_max"]);
        assert_eq!(batches[0].num_columns(), 3);
    }
}
