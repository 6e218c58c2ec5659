//! Error types for the evapo-methods crate.

use evapo_calendar::Cadence;

/// Error type for all fallible operations in the evapo-methods crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MethodsError {
    /// Returned when a method cannot run at the requested or derived cadence.
    #[error("{method} cannot run at {cadence} cadence: {detail}")]
    CadenceMismatch {
        /// Method name.
        method: String,
        /// The offending cadence.
        cadence: Cadence,
        /// What did not match.
        detail: String,
    },

    /// Returned when the plausibility bounds are unusable.
    #[error("invalid bounds: min {min} must be finite and below max {max}")]
    InvalidBounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Returned when an interpolation setting is out of range.
    #[error("invalid interpolation config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when joining tables keyed by different indexes.
    #[error("cannot join tables with different indexes ({left} vs {right} rows)")]
    IndexMismatch {
        /// Rows in the left table.
        left: usize,
        /// Rows in the right table.
        right: usize,
    },

    /// Returned when a column name would appear twice after a join.
    #[error("duplicate column: {name}")]
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },

    /// Returned when an ET method name is not recognised.
    #[error("unknown ET method: {name:?} (expected fao or hargreaves)")]
    UnknownMethod {
        /// The unrecognised name.
        name: String,
    },

    /// Regularisation error from gap filling.
    #[error(transparent)]
    Regularize(#[from] evapo_regularize::RegularizeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_cadence_mismatch() {
        let e = MethodsError::CadenceMismatch {
            method: "Hargreaves".to_string(),
            cadence: Cadence::SubDaily,
            detail: "requires daily or coarser data".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Hargreaves cannot run at hours cadence: requires daily or coarser data"
        );
    }

    #[test]
    fn display_invalid_bounds() {
        let e = MethodsError::InvalidBounds {
            min: 15.0,
            max: 0.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid bounds: min 15 must be finite and below max 0"
        );
    }

    #[test]
    fn display_index_mismatch() {
        let e = MethodsError::IndexMismatch { left: 3, right: 4 };
        assert_eq!(
            e.to_string(),
            "cannot join tables with different indexes (3 vs 4 rows)"
        );
    }

    #[test]
    fn display_duplicate_column() {
        let e = MethodsError::DuplicateColumn {
            name: "ETo_FAO_mm".to_string(),
        };
        assert_eq!(e.to_string(), "duplicate column: ETo_FAO_mm");
    }

    #[test]
    fn from_regularize_error() {
        let e: MethodsError = evapo_regularize::RegularizeError::InvalidStep {
            reason: "zero".to_string(),
        }
        .into();
        assert!(matches!(e, MethodsError::Regularize(_)));
        assert_eq!(e.to_string(), "invalid step: zero");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<MethodsError>();
    }
}
