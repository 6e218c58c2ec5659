//! Error types for the evapo-calendar crate.

/// Error type for all fallible operations in the evapo-calendar crate.
///
/// Covers malformed timestamp indexes, unrecognised cadence names and
/// indexes too short to infer a spacing from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a timestamp sequence is empty or not strictly ascending.
    #[error("invalid index: {reason}")]
    InvalidIndex {
        /// Description of the problem with the index.
        reason: String,
    },

    /// Returned when a cadence name is neither daily nor sub-daily.
    #[error("unsupported cadence: {value:?} (expected days or hours)")]
    UnsupportedCadence {
        /// The unrecognised cadence name.
        value: String,
    },

    /// Returned when a spacing cannot be inferred from the index.
    #[error("cannot infer index step from {len} timestamp(s)")]
    CannotInferStep {
        /// Number of timestamps that were available.
        len: usize,
    },
}
