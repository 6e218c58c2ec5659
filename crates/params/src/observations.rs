//! The sparse observation table fed to the cascade.

use std::collections::BTreeMap;

use evapo_calendar::TimeIndex;

use crate::error::ParamsError;
use crate::field::Field;

/// Observations keyed by a [`TimeIndex`], with any subset of [`Field`]s.
///
/// Missing values are `NaN`. A field that was never supplied reads as an
/// all-`NaN` column, so "absent column" and "every row null" are the same
/// thing to the cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    index: TimeIndex,
    columns: BTreeMap<Field, Vec<f64>>,
}

impl Observations {
    /// Creates a table with no columns.
    pub fn new(index: TimeIndex) -> Self {
        Self {
            index,
            columns: BTreeMap::new(),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_field(mut self, field: Field, values: Vec<f64>) -> Result<Self, ParamsError> {
        self.insert(field, values)?;
        Ok(self)
    }

    /// Adds or replaces a column.
    ///
    /// Non-finite values are stored as `NaN`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::LengthMismatch`] if the column length differs
    /// from the index length.
    pub fn insert(&mut self, field: Field, mut values: Vec<f64>) -> Result<(), ParamsError> {
        if values.len() != self.index.len() {
            return Err(ParamsError::LengthMismatch {
                field: field.name().to_string(),
                expected: self.index.len(),
                got: values.len(),
            });
        }
        for v in values.iter_mut().filter(|v| !v.is_finite()) {
            *v = f64::NAN;
        }
        self.columns.insert(field, values);
        Ok(())
    }

    /// The timestamp index.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false`; the index is never empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The supplied column, if any.
    pub fn column(&self, field: Field) -> Option<&[f64]> {
        self.columns.get(&field).map(Vec::as_slice)
    }

    /// A copy of the column, or an all-`NaN` column when never supplied.
    pub fn values(&self, field: Field) -> Vec<f64> {
        match self.columns.get(&field) {
            Some(col) => col.clone(),
            None => vec![f64::NAN; self.len()],
        }
    }

    /// Whether the field has at least one non-missing value.
    pub fn has(&self, field: Field) -> bool {
        self.column(field)
            .is_some_and(|col| col.iter().any(|v| !v.is_nan()))
    }

    /// Fields that were supplied, in column order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.columns.keys().copied()
    }
}
