use chrono::TimeDelta;
use evapo_calendar::TimeIndex;

/// Columns placed on a fixed-step grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Regularized {
    index: TimeIndex,
    step: TimeDelta,
    columns: Vec<Vec<f64>>,
    n_filled: usize,
}

impl Regularized {
    pub(crate) fn new(
        index: TimeIndex,
        step: TimeDelta,
        columns: Vec<Vec<f64>>,
        n_filled: usize,
    ) -> Self {
        Self {
            index,
            step,
            columns,
            n_filled,
        }
    }

    /// The fixed-step index shared by every column.
    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Grid spacing.
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Regularised columns, in input order.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Column `i`, if present.
    pub fn column(&self, i: usize) -> Option<&[f64]> {
        self.columns.get(i).map(Vec::as_slice)
    }

    /// Total number of values filled by interpolation across all columns.
    pub fn n_filled(&self) -> usize {
        self.n_filled
    }

    /// Number of grid positions.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false`; a grid has at least one position.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Consumes the result, returning the index and columns.
    pub fn into_parts(self) -> (TimeIndex, Vec<Vec<f64>>) {
        (self.index, self.columns)
    }
}
