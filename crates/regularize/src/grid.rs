//! Fixed-step grid construction and binning.

use chrono::{DurationRound, NaiveDateTime, TimeDelta};

use crate::error::RegularizeError;

/// Largest grid the regulariser will allocate.
pub(crate) const MAX_STEPS: usize = 50_000_000;

/// Grid positions are computed in whole milliseconds.
pub(crate) const MIN_STEP: TimeDelta = TimeDelta::milliseconds(1);

/// Rejects steps the grid cannot resolve.
pub(crate) fn check_step(step: TimeDelta) -> Result<(), RegularizeError> {
    if step < MIN_STEP {
        return Err(RegularizeError::InvalidStep {
            reason: format!("step must be at least {MIN_STEP}, got {step}"),
        });
    }
    Ok(())
}

/// A fixed-step grid anchored at a step-aligned timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Grid {
    pub anchor: NaiveDateTime,
    pub step: TimeDelta,
    pub len: usize,
}

impl Grid {
    /// Builds the grid covering `first..=last`.
    ///
    /// The anchor is `first` truncated to a multiple of `step`, so a daily
    /// grid starts at midnight and an hourly grid on the hour.
    pub(crate) fn covering(
        first: NaiveDateTime,
        last: NaiveDateTime,
        step: TimeDelta,
    ) -> Result<Self, RegularizeError> {
        check_step(step)?;
        let anchor = first
            .duration_trunc(step)
            .map_err(|e| RegularizeError::InvalidStep {
                reason: e.to_string(),
            })?;
        let len = Self::offset(anchor, step, last) + 1;
        if len > MAX_STEPS {
            return Err(RegularizeError::TooManySteps {
                n: len,
                max: MAX_STEPS,
            });
        }
        Ok(Self { anchor, step, len })
    }

    /// Grid position of the bin containing `t` (`t >= anchor`).
    pub(crate) fn position(&self, t: NaiveDateTime) -> usize {
        Self::offset(self.anchor, self.step, t)
    }

    fn offset(anchor: NaiveDateTime, step: TimeDelta, t: NaiveDateTime) -> usize {
        let elapsed = (t - anchor).num_milliseconds();
        (elapsed / step.num_milliseconds()).max(0) as usize
    }

    /// Timestamps of every grid position.
    pub(crate) fn timestamps(&self) -> Vec<NaiveDateTime> {
        (0..self.len)
            .map(|i| self.anchor + self.step * i as i32)
            .collect()
    }
}

/// Averages the finite values of `values` falling into each grid bin.
///
/// Bins without any finite value are `NaN`.
pub(crate) fn bin_means(grid: &Grid, timestamps: &[NaiveDateTime], values: &[f64]) -> Vec<f64> {
    let mut sums = vec![0.0; grid.len];
    let mut counts = vec![0usize; grid.len];
    for (&t, &v) in timestamps.iter().zip(values) {
        if v.is_finite() {
            let pos = grid.position(t);
            sums[pos] += v;
            counts[pos] += 1;
        }
    }
    sums.iter()
        .zip(&counts)
        .map(|(&s, &n)| if n == 0 { f64::NAN } else { s / n as f64 })
        .collect()
}
