use evapo_calendar::TimeIndex;

use crate::error::MethodsError;

/// Named ET series sharing one index.
#[derive(Debug, Clone, PartialEq)]
pub struct EtTable {
    index: TimeIndex,
    columns: Vec<(String, Vec<f64>)>,
}

impl EtTable {
    pub(crate) fn new(index: TimeIndex, columns: Vec<(String, Vec<f64>)>) -> Self {
        Self { index, columns }
    }

    /// The timestamp index.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Column names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Every column with its name, in order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Appends the columns of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`MethodsError::IndexMismatch`] if the indexes differ and
    /// [`MethodsError::DuplicateColumn`] if a name appears in both.
    pub fn join(mut self, other: EtTable) -> Result<Self, MethodsError> {
        if self.index != other.index {
            return Err(MethodsError::IndexMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        for (name, values) in other.columns {
            if self.column(&name).is_some() {
                return Err(MethodsError::DuplicateColumn { name });
            }
            self.columns.push((name, values));
        }
        Ok(self)
    }
}
