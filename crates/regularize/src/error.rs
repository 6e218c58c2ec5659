//! Error types for the evapo-regularize crate.

/// Error type for all fallible operations in the evapo-regularize crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegularizeError {
    /// Returned when a column length differs from the index length.
    #[error("column {column}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Position of the offending column.
        column: usize,
        /// Expected length (the index length).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a grid step is zero, negative or unusable.
    #[error("invalid step: {reason}")]
    InvalidStep {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an interpolation method name is not recognised.
    #[error("unknown interpolation method: {name:?}")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when the target grid would be unreasonably large.
    #[error("grid of {n} steps exceeds the maximum of {max}")]
    TooManySteps {
        /// Number of grid steps requested.
        n: usize,
        /// Maximum permitted.
        max: usize,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] evapo_calendar::CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_length_mismatch() {
        let e = RegularizeError::LengthMismatch {
            column: 2,
            expected: 10,
            got: 9,
        };
        assert_eq!(e.to_string(), "column 2: expected 10 elements, got 9");
    }

    #[test]
    fn display_invalid_step() {
        let e = RegularizeError::InvalidStep {
            reason: "step must be positive".to_string(),
        };
        assert_eq!(e.to_string(), "invalid step: step must be positive");
    }

    #[test]
    fn display_unknown_method() {
        let e = RegularizeError::UnknownMethod {
            name: "spline".to_string(),
        };
        assert_eq!(e.to_string(), "unknown interpolation method: \"spline\"");
    }

    #[test]
    fn display_too_many_steps() {
        let e = RegularizeError::TooManySteps { n: 10, max: 5 };
        assert_eq!(e.to_string(), "grid of 10 steps exceeds the maximum of 5");
    }

    #[test]
    fn from_calendar_error() {
        let e: RegularizeError = evapo_calendar::CalendarError::CannotInferStep { len: 1 }.into();
        assert!(matches!(e, RegularizeError::Calendar(_)));
        assert_eq!(e.to_string(), "cannot infer index step from 1 timestamp(s)");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<RegularizeError>();
    }
}
