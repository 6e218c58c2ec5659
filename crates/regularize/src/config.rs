//! Configuration for regularisation.

use std::str::FromStr;

use chrono::TimeDelta;

use crate::error::RegularizeError;
use crate::grid::check_step;

/// Interpolation used to fill interior gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpMethod {
    /// Straight line between the bracketing values, by position.
    Linear,
    /// Straight line weighted by the actual timestamps.
    Time,
    /// Value of the closer bracketing neighbour (earlier on ties).
    Nearest,
    /// Monotone piecewise cubic Hermite through all valid values.
    Pchip,
}

impl InterpMethod {
    /// Lowercase method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Time => "time",
            Self::Nearest => "nearest",
            Self::Pchip => "pchip",
        }
    }
}

impl FromStr for InterpMethod {
    type Err = RegularizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "time" => Ok(Self::Time),
            "nearest" => Ok(Self::Nearest),
            "pchip" => Ok(Self::Pchip),
            _ => Err(RegularizeError::UnknownMethod {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for [`regularize`](crate::regularize).
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use evapo_regularize::{InterpMethod, RegularizeConfig};
///
/// let config = RegularizeConfig::new()
///     .with_step(Some(TimeDelta::hours(1)))
///     .with_method(Some(InterpMethod::Pchip))
///     .with_max_gap(6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegularizeConfig {
    step: Option<TimeDelta>,
    method: Option<InterpMethod>,
    max_gap: usize,
}

impl Default for RegularizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RegularizeConfig {
    /// Creates a configuration with defaults: inferred step, no
    /// interpolation, `max_gap = 15`.
    pub fn new() -> Self {
        Self {
            step: None,
            method: None,
            max_gap: 15,
        }
    }

    /// Sets the grid step, or `None` to infer it from the index.
    pub fn with_step(mut self, step: Option<TimeDelta>) -> Self {
        self.step = step;
        self
    }

    /// Sets the interpolation method, or `None` to leave gaps as `NaN`.
    pub fn with_method(mut self, method: Option<InterpMethod>) -> Self {
        self.method = method;
        self
    }

    /// Sets the longest gap (in grid steps) that is filled.
    pub fn with_max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Returns the grid step, if fixed.
    pub fn step(&self) -> Option<TimeDelta> {
        self.step
    }

    /// Returns the interpolation method, if any.
    pub fn method(&self) -> Option<InterpMethod> {
        self.method
    }

    /// Returns the maximum fillable gap length.
    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegularizeError::InvalidStep`] if a fixed step is shorter
    /// than one millisecond.
    pub fn validate(&self) -> Result<(), RegularizeError> {
        if let Some(step) = self.step {
            check_step(step)?;
        }
        Ok(())
    }
}

/// Parses a step such as `"1d"`, `"D"`, `"6h"`, `"30min"` or `"15T"`.
///
/// A missing count means one unit.
///
/// # Errors
///
/// Returns [`RegularizeError::InvalidStep`] for unknown units, zero counts
/// or malformed input.
pub fn parse_step(s: &str) -> Result<TimeDelta, RegularizeError> {
    let trimmed = s.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (count, unit) = trimmed.split_at(split);
    let invalid = |reason: &str| RegularizeError::InvalidStep {
        reason: format!("{reason}: {s:?}"),
    };

    let count: i64 = if count.is_empty() {
        1
    } else {
        count.parse().map_err(|_| invalid("bad count"))?
    };
    if count == 0 {
        return Err(invalid("count must be positive"));
    }

    let step = match unit.trim() {
        "d" | "D" | "day" | "days" => TimeDelta::try_days(count),
        "h" | "H" | "hour" | "hours" => TimeDelta::try_hours(count),
        "min" | "T" | "minute" | "minutes" => TimeDelta::try_minutes(count),
        "s" | "S" | "sec" | "second" | "seconds" => TimeDelta::try_seconds(count),
        _ => return Err(invalid("unknown unit")),
    };
    step.ok_or_else(|| invalid("step out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = RegularizeConfig::default();
        assert_eq!(cfg.step(), None);
        assert_eq!(cfg.method(), None);
        assert_eq!(cfg.max_gap(), 15);
    }

    #[test]
    fn builder_methods() {
        let cfg = RegularizeConfig::new()
            .with_step(Some(TimeDelta::days(1)))
            .with_method(Some(InterpMethod::Nearest))
            .with_max_gap(2);
        assert_eq!(cfg.step(), Some(TimeDelta::days(1)));
        assert_eq!(cfg.method(), Some(InterpMethod::Nearest));
        assert_eq!(cfg.max_gap(), 2);
    }

    #[test]
    fn validate_rejects_non_positive_step() {
        let cfg = RegularizeConfig::new().with_step(Some(TimeDelta::zero()));
        assert!(matches!(
            cfg.validate(),
            Err(RegularizeError::InvalidStep { .. })
        ));
    }

    #[test]
    fn validate_rejects_sub_millisecond_step() {
        let cfg = RegularizeConfig::new().with_step(Some(TimeDelta::microseconds(500)));
        assert!(matches!(
            cfg.validate(),
            Err(RegularizeError::InvalidStep { .. })
        ));
        let cfg = RegularizeConfig::new().with_step(Some(TimeDelta::milliseconds(1)));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn method_names() {
        for m in [
            InterpMethod::Linear,
            InterpMethod::Time,
            InterpMethod::Nearest,
            InterpMethod::Pchip,
        ] {
            assert_eq!(m.as_str().parse::<InterpMethod>().unwrap(), m);
        }
        assert!("PCHIP".parse::<InterpMethod>().is_ok());
        assert!(matches!(
            "akima".parse::<InterpMethod>(),
            Err(RegularizeError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn parse_step_units() {
        assert_eq!(parse_step("1d").unwrap(), TimeDelta::days(1));
        assert_eq!(parse_step("D").unwrap(), TimeDelta::days(1));
        assert_eq!(parse_step("H").unwrap(), TimeDelta::hours(1));
        assert_eq!(parse_step("6h").unwrap(), TimeDelta::hours(6));
        assert_eq!(parse_step("30min").unwrap(), TimeDelta::minutes(30));
        assert_eq!(parse_step("15T").unwrap(), TimeDelta::minutes(15));
        assert_eq!(parse_step(" 2 days ").unwrap(), TimeDelta::days(2));
    }

    #[test]
    fn parse_step_rejects_garbage() {
        assert!(parse_step("0h").is_err());
        assert!(parse_step("3 fortnights").is_err());
        assert!(parse_step("").is_err());
    }
}
