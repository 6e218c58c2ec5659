//! Error types for the evapo-params crate.

use evapo_calendar::Cadence;

/// Error type for all fallible operations in the evapo-params crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    /// Returned when a column length differs from the index length.
    #[error("column {field}: expected {expected} values, got {got}")]
    LengthMismatch {
        /// Name of the offending column.
        field: String,
        /// Expected length (the index length).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a column name is not a recognised observation field.
    #[error("unknown observation field: {name:?}")]
    UnknownField {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when the minimum fields for a cadence are absent.
    #[error("insufficient input for {cadence} cascade: missing {missing}")]
    InsufficientInput {
        /// Cadence the cascade was asked to run at.
        cadence: Cadence,
        /// Description of what is missing.
        missing: String,
    },

    /// Returned when a site parameter is out of range.
    #[error("invalid site: {reason}")]
    InvalidSite {
        /// Description of the problem.
        reason: String,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] evapo_calendar::CalendarError),
}
