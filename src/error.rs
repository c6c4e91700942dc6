//! Error types for the recommendation core.

/// Error type for all fallible operations in the loader, index, and model.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecError {
    /// Returned when the feature store cannot be reached or queried.
    #[error("feature store unavailable: {reason}")]
    StoreUnavailable {
        /// Description of the underlying connection or query failure.
        reason: String,
    },

    /// Returned when a store row is missing one of the required feature
    /// columns or holds a non-numeric value.
    #[error("malformed feature row: {reason}")]
    MalformedRow {
        /// Description of the column that failed to read.
        reason: String,
    },

    /// Returned when fitting an index over zero rows.
    #[error("cannot fit an index over an empty feature matrix")]
    EmptyIndex,

    /// Returned when a vector's arity does not match the index.
    #[error("expected {expected} dimensions, got {got}")]
    DimensionMismatch {
        /// Arity the index was fit with.
        expected: usize,
        /// Arity of the offending vector.
        got: usize,
    },

    /// Returned by every query when the model failed to build at startup.
    #[error("recommendation model is not available")]
    ModelUnavailable,
}
