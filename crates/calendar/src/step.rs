//! Index spacing inference.

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::CalendarError;

/// Number of leading timestamps inspected when inferring a spacing.
pub const INFER_WINDOW: usize = 5;

/// Infers the spacing of a timestamp sequence from its first entries.
///
/// Returns the smallest positive difference between consecutive timestamps
/// among the first [`INFER_WINDOW`] entries. A single gap in the leading
/// window therefore does not inflate the result.
///
/// # Errors
///
/// Returns [`CalendarError::CannotInferStep`] when fewer than two timestamps
/// are given or no positive difference exists among them.
pub fn infer_step(timestamps: &[NaiveDateTime]) -> Result<TimeDelta, CalendarError> {
    let head = &timestamps[..timestamps.len().min(INFER_WINDOW)];
    head.windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > TimeDelta::zero())
        .min()
        .ok_or(CalendarError::CannotInferStep {
            len: timestamps.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn daily_step() {
        let ts = [at(1, 0), at(2, 0), at(3, 0)];
        assert_eq!(infer_step(&ts).unwrap(), TimeDelta::days(1));
    }

    #[test]
    fn hourly_step() {
        let ts = [at(1, 0), at(1, 1), at(1, 2), at(1, 3)];
        assert_eq!(infer_step(&ts).unwrap(), TimeDelta::hours(1));
    }

    #[test]
    fn leading_gap_uses_smallest_spacing() {
        let ts = [at(1, 0), at(4, 0), at(5, 0), at(6, 0)];
        assert_eq!(infer_step(&ts).unwrap(), TimeDelta::days(1));
    }

    #[test]
    fn only_window_is_inspected() {
        // Hourly spacing appears only after the inference window.
        let mut ts: Vec<_> = (1..=6).map(|d| at(d, 0)).collect();
        ts.push(at(6, 1));
        assert_eq!(infer_step(&ts).unwrap(), TimeDelta::days(1));
    }

    #[test]
    fn single_timestamp_fails() {
        assert_eq!(
            infer_step(&[at(1, 0)]).unwrap_err(),
            CalendarError::CannotInferStep { len: 1 }
        );
    }

    #[test]
    fn empty_fails() {
        assert_eq!(
            infer_step(&[]).unwrap_err(),
            CalendarError::CannotInferStep { len: 0 }
        );
    }
}
