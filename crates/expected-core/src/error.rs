//! Error types for reading member values

use thiserror::Error;

/// Result type for member reads
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors raised by a member accessor
///
/// Comparison never catches these: a failing read aborts the comparison
/// call that triggered it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The accessor itself failed (e.g. a computed property)
    #[error("member '{member}' could not be read: {reason}")]
    Accessor { member: String, reason: String },

    /// Indexed read outside the member's extent
    #[error("index {index} is out of range for '{member}' (len {len})")]
    IndexOutOfRange {
        member: String,
        index: i64,
        len: usize,
    },

    /// Wrong number of index arguments for the member
    #[error("member '{member}' takes {expected} index argument(s), got {actual}")]
    IndexArity {
        member: String,
        expected: usize,
        actual: usize,
    },
}

impl ReadError {
    /// Build an accessor failure for `member`
    pub fn accessor(member: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Accessor {
            member: member.into(),
            reason: reason.into(),
        }
    }
}
