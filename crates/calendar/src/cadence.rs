//! Observation cadence.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::CalendarError;

/// Aggregation interval of a station record.
///
/// The cadence selects structurally different derivation branches: daily
/// records work from temperature extremes, sub-daily records from the
/// period mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cadence {
    /// Daily (or coarser) aggregates.
    #[default]
    Daily,
    /// Hourly or finer aggregates.
    SubDaily,
}

impl Cadence {
    /// Classifies an index spacing: anything shorter than one day is sub-daily.
    pub fn from_step(step: TimeDelta) -> Self {
        if step < TimeDelta::days(1) {
            Self::SubDaily
        } else {
            Self::Daily
        }
    }

    /// Returns `true` for [`Cadence::Daily`].
    pub fn is_daily(self) -> bool {
        matches!(self, Self::Daily)
    }

    /// Canonical name, matching what [`FromStr`] accepts first.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "days",
            Self::SubDaily => "hours",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "days" | "day" | "daily" | "d" => Ok(Self::Daily),
            "hours" | "hour" | "hourly" | "h" | "sub-daily" | "subdaily" => Ok(Self::SubDaily),
            _ => Err(CalendarError::UnsupportedCadence {
                value: s.to_string(),
            }),
        }
    }
}
