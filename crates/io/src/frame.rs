//! Tabular output assembled from ET and parameter tables.

use chrono::NaiveDateTime;
use evapo_calendar::TimeIndex;
use evapo_methods::EtTable;
use evapo_params::{DerivedParams, QualityRecord};

use crate::error::IoError;

/// Name of the quality code column added to parameter output.
pub const QUALITY_COLUMN: &str = "est_val";

/// One output column.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameColumn {
    /// Floating-point values; `NaN` is written as a missing value.
    Float64(Vec<f64>),
    /// Unsigned integer codes.
    UInt64(Vec<u64>),
}

impl FrameColumn {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::UInt64(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A timestamped table ready to be written.
///
/// Columns keep insertion order. The timestamp column is written first,
/// under the name configured on the writer.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFrame {
    timestamps: Vec<NaiveDateTime>,
    columns: Vec<(String, FrameColumn)>,
}

impl OutputFrame {
    /// Creates a frame with no data columns.
    pub fn new(index: &TimeIndex) -> Self {
        Self {
            timestamps: index.timestamps().to_vec(),
            columns: Vec::new(),
        }
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// - [`IoError::Validation`] if the length differs from the index.
    /// - [`IoError::Validation`] if a column with that name already exists.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: FrameColumn,
    ) -> Result<Self, IoError> {
        let name = name.into();
        if column.len() != self.timestamps.len() {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "column '{name}' has {} rows, expected {}",
                    column.len(),
                    self.timestamps.len()
                ),
            });
        }
        if self.column(&name).is_some() {
            return Err(IoError::Validation {
                count: 1,
                details: format!("duplicate column '{name}'"),
            });
        }
        self.columns.push((name, column));
        Ok(self)
    }

    /// Every column of an ET table.
    pub fn from_et(table: &EtTable) -> Result<Self, IoError> {
        table.columns().try_fold(Self::new(table.index()), |frame, (name, values)| {
            frame.with_column(name, FrameColumn::Float64(values.to_vec()))
        })
    }

    /// Every derived parameter followed by the per-row quality code.
    pub fn from_params(params: &DerivedParams, quality: &QualityRecord) -> Result<Self, IoError> {
        let frame = params
            .columns()
            .into_iter()
            .try_fold(Self::new(params.index()), |frame, (name, values)| {
                frame.with_column(name, FrameColumn::Float64(values.to_vec()))
            })?;
        frame.with_column(QUALITY_COLUMN, FrameColumn::UInt64(quality.codes()))
    }

    // --- Accessors ---

    /// Row timestamps.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Column names in output order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Columns in output order.
    pub fn columns(&self) -> &[(String, FrameColumn)] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&FrameColumn> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    /// Returns `true` when every timestamp falls on midnight.
    pub(crate) fn is_date_only(&self) -> bool {
        self.timestamps
            .iter()
            .all(|t| t.time() == chrono::NaiveTime::MIN)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn index(n: usize, hourly: bool) -> TimeIndex {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let step = if hourly {
            chrono::TimeDelta::hours(1)
        } else {
            chrono::TimeDelta::days(1)
        };
        TimeIndex::new((0..n as i32).map(|i| start + step * i).collect()).unwrap()
    }

    #[test]
    fn columns_keep_order() {
        let frame = OutputFrame::new(&index(2, false))
            .with_column("b", FrameColumn::Float64(vec![1.0, 2.0]))
            .unwrap()
            .with_column("a", FrameColumn::UInt64(vec![0, 1]))
            .unwrap();
        assert_eq!(frame.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.column("a"), Some(&FrameColumn::UInt64(vec![0, 1])));
    }

    #[test]
    fn rejects_wrong_length_and_duplicates() {
        let frame = OutputFrame::new(&index(2, false));
        assert!(
            frame
                .clone()
                .with_column("x", FrameColumn::Float64(vec![1.0]))
                .is_err()
        );
        let frame = frame
            .with_column("x", FrameColumn::Float64(vec![1.0, 2.0]))
            .unwrap();
        assert!(
            frame
                .with_column("x", FrameColumn::Float64(vec![1.0, 2.0]))
                .is_err()
        );
    }

    #[test]
    fn date_only_detection() {
        assert!(OutputFrame::new(&index(3, false)).is_date_only());
        assert!(!OutputFrame::new(&index(3, true)).is_date_only());
    }
}
