//! Error types for comparisons

use expected_core::ReadError;
use thiserror::Error;

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Faults that abort a comparison
///
/// Mismatches are never errors; they are recorded as
/// [`Difference`](crate::Difference)s. These variants cover the cases where
/// comparison cannot continue at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// A member accessor failed while being read
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: ReadError,
    },

    /// Recursion went deeper than the configured limit (usually a cycle)
    #[error("comparison depth limit of {limit} exceeded at '{path}'")]
    DepthExceeded { path: String, limit: usize },

    /// No registered strategy accepts the value's type
    #[error("no comparison strategy accepts type '{type_name}'")]
    NoStrategy { type_name: String },
}
