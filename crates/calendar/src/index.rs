//! Validated timestamp index.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

use crate::cadence::Cadence;
use crate::error::CalendarError;
use crate::step::infer_step;

/// A non-empty, strictly ascending sequence of timestamps.
///
/// Every table in evapo is keyed by one of these. Timestamps label the
/// START of the period they aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeIndex {
    timestamps: Vec<NaiveDateTime>,
}

impl TimeIndex {
    /// Creates a new index after checking it is non-empty and strictly ascending.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidIndex`] if the sequence is empty, or
    /// if any timestamp is not later than its predecessor (duplicates
    /// included).
    pub fn new(timestamps: Vec<NaiveDateTime>) -> Result<Self, CalendarError> {
        if timestamps.is_empty() {
            return Err(CalendarError::InvalidIndex {
                reason: "index is empty".to_string(),
            });
        }
        if let Some(pos) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CalendarError::InvalidIndex {
                reason: format!(
                    "timestamps not strictly ascending at position {}: {} then {}",
                    pos + 1,
                    timestamps[pos],
                    timestamps[pos + 1]
                ),
            });
        }
        Ok(Self { timestamps })
    }

    /// Returns the timestamps.
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    /// Returns the number of timestamps.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Always `false`; an index cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// First timestamp.
    pub fn first(&self) -> NaiveDateTime {
        self.timestamps[0]
    }

    /// Last timestamp.
    pub fn last(&self) -> NaiveDateTime {
        self.timestamps[self.timestamps.len() - 1]
    }

    /// Infers the spacing from the leading entries.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::CannotInferStep`] for single-entry indexes.
    pub fn infer_step(&self) -> Result<TimeDelta, CalendarError> {
        infer_step(&self.timestamps)
    }

    /// Cadence implied by the inferred spacing, or `None` when the index
    /// is too short to tell.
    pub fn inferred_cadence(&self) -> Option<Cadence> {
        self.infer_step().ok().map(Cadence::from_step)
    }

    /// Day of year (1..=366) of every timestamp.
    pub fn days_of_year(&self) -> Vec<u32> {
        self.timestamps.iter().map(|t| t.ordinal()).collect()
    }

    /// Fractional hour of day (0.0..24.0) of every timestamp.
    pub fn hours(&self) -> Vec<f64> {
        self.timestamps
            .iter()
            .map(|t| t.hour() as f64 + t.minute() as f64 / 60.0 + t.second() as f64 / 3600.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn new_valid() {
        let index = TimeIndex::new(vec![ts(2000, 1, 1, 0, 0), ts(2000, 1, 2, 0, 0)]).unwrap();
        assert_eq!(index.len(), 2);
        assert!(!index.is_empty());
        assert_eq!(index.first(), ts(2000, 1, 1, 0, 0));
        assert_eq!(index.last(), ts(2000, 1, 2, 0, 0));
    }

    #[test]
    fn new_empty_is_invalid() {
        let err = TimeIndex::new(vec![]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidIndex { .. }));
    }

    #[test]
    fn new_descending_is_invalid() {
        let err = TimeIndex::new(vec![ts(2000, 1, 2, 0, 0), ts(2000, 1, 1, 0, 0)]).unwrap_err();
        match err {
            CalendarError::InvalidIndex { reason } => assert!(reason.contains("position 1")),
            other => panic!("expected InvalidIndex, got {other:?}"),
        }
    }

    #[test]
    fn new_duplicate_is_invalid() {
        let t = ts(2000, 1, 1, 0, 0);
        assert!(TimeIndex::new(vec![t, t]).is_err());
    }

    #[test]
    fn days_of_year_handles_leap_years() {
        let index = TimeIndex::new(vec![
            ts(2000, 2, 29, 0, 0),
            ts(2000, 3, 1, 0, 0),
            ts(2000, 12, 31, 0, 0),
        ])
        .unwrap();
        assert_eq!(index.days_of_year(), vec![60, 61, 366]);
    }

    #[test]
    fn hours_are_fractional() {
        let index = TimeIndex::new(vec![ts(2000, 1, 1, 0, 0), ts(2000, 1, 1, 13, 30)]).unwrap();
        assert_eq!(index.hours(), vec![0.0, 13.5]);
    }

    #[test]
    fn inferred_cadence() {
        let hourly = TimeIndex::new(vec![ts(2000, 1, 1, 0, 0), ts(2000, 1, 1, 1, 0)]).unwrap();
        assert_eq!(hourly.inferred_cadence(), Some(Cadence::SubDaily));

        let single = TimeIndex::new(vec![ts(2000, 1, 1, 0, 0)]).unwrap();
        assert_eq!(single.inferred_cadence(), None);
    }
}
