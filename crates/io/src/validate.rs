//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus the header checks run before
//! any row is converted.

use evapo_params::Field;

use crate::error::IoError;

/// At most this many bad rows are listed individually.
const MAX_ROW_MESSAGES: usize = 10;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
    suppressed: usize,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self {
            errors: Vec::new(),
            suppressed: 0,
        }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Record a per-row error, listing only the first few rows verbatim.
    pub(crate) fn push_row(&mut self, row: usize, msg: impl std::fmt::Display) {
        if self.errors.len() < MAX_ROW_MESSAGES {
            self.errors.push(format!("row {row}: {msg}"));
        } else {
            self.suppressed += 1;
        }
    }

    /// Append every error from `other`.
    pub(crate) fn merge(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
        self.suppressed += other.suppressed;
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.suppressed == 0
    }

    /// Returns the number of recorded errors.
    pub(crate) fn len(&self) -> usize {
        self.errors.len() + self.suppressed
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(mut self) -> Result<(), IoError> {
        if self.errors.is_empty() && self.suppressed == 0 {
            return Ok(());
        }
        let count = self.len();
        if self.suppressed > 0 {
            self.errors
                .push(format!("... and {} more row(s)", self.suppressed));
        }
        Err(IoError::Validation {
            count,
            details: self.errors.join("; "),
        })
    }
}

// ---------------------------------------------------------------------------
// Header checks
// ---------------------------------------------------------------------------

/// A header column recognised as an observation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldColumn {
    /// Position of the column in the file.
    pub position: usize,
    /// The observation it carries.
    pub field: Field,
}

/// Match header names against the observation fields.
///
/// The date column and unrecognised names are skipped. A field named by
/// more than one column is reported as a duplicate and only its first
/// occurrence is kept.
pub(crate) fn match_fields(
    names: &[String],
    date_column: &str,
) -> (Vec<FieldColumn>, ValidationCollector) {
    let mut c = ValidationCollector::new();
    let mut matched: Vec<FieldColumn> = Vec::new();

    for (position, name) in names.iter().enumerate() {
        if name.trim() == date_column {
            continue;
        }
        let Ok(field) = name.parse::<Field>() else {
            tracing::debug!(column = %name, "ignoring unrecognised column");
            continue;
        };
        if matched.iter().any(|m| m.field == field) {
            c.push(format!("duplicate column '{field}'"));
            continue;
        }
        matched.push(FieldColumn { position, field });
    }

    (matched, c)
}

/// Find the position of the date column, rejecting duplicates.
pub(crate) fn date_position(
    names: &[String],
    date_column: &str,
) -> (Option<usize>, ValidationCollector) {
    let mut c = ValidationCollector::new();
    let positions: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, n)| n.trim() == date_column)
        .map(|(i, _)| i)
        .collect();
    if positions.len() > 1 {
        c.push(format!("duplicate column '{date_column}'"));
    }
    (positions.first().copied(), c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn empty_collector_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push("second");
        assert_eq!(c.len(), 2);
        match c.finish() {
            Err(IoError::Validation { count, details }) => {
                assert_eq!(count, 2);
                assert_eq!(details, "first; second");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn row_messages_are_capped() {
        let mut c = ValidationCollector::new();
        for row in 0..25 {
            c.push_row(row, "bad date");
        }
        assert_eq!(c.len(), 25);
        match c.finish() {
            Err(IoError::Validation { count, details }) => {
                assert_eq!(count, 25);
                assert!(details.starts_with("row 0: bad date"));
                assert!(details.ends_with("... and 15 more row(s)"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn merge_keeps_both() {
        let mut a = ValidationCollector::new();
        a.push("a");
        let mut b = ValidationCollector::new();
        b.push("b");
        a.merge(b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn match_fields_skips_date_and_unknown() {
        let (matched, c) = match_fields(&names(&["date", "T_max", "station", "T_min"]), "date");
        assert!(c.is_empty());
        assert_eq!(
            matched,
            vec![
                FieldColumn {
                    position: 1,
                    field: Field::TMax
                },
                FieldColumn {
                    position: 3,
                    field: Field::TMin
                },
            ]
        );
    }

    #[test]
    fn match_fields_reports_duplicates() {
        let (matched, c) = match_fields(&names(&["date", "T_max", " T_max "]), "date");
        assert_eq!(matched.len(), 1);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn date_position_found_and_duplicated() {
        let (pos, c) = date_position(&names(&["T_max", "date"]), "date");
        assert_eq!(pos, Some(1));
        assert!(c.is_empty());

        let (pos, c) = date_position(&names(&["date", "date"]), "date");
        assert_eq!(pos, Some(0));
        assert_eq!(c.len(), 1);

        let (pos, _) = date_position(&names(&["T_max"]), "date");
        assert_eq!(pos, None);
    }
}
