use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, orst_sorts::error::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Argument errors surfaced by the public entry points.
///
/// Comparators that are not strict weak orders are a contract violation and are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Raised when quickselect is asked for a rank outside of `1..=len`.
    InvalidRank { k: usize, len: usize },

    /// Raised when a range-restricted sort names an index past the end of the slice.
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },

    /// Raised when an ascending-only algorithm is asked to sort by a custom comparator.
    ComparatorUnsupported { algorithm: &'static str },
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidRank { k, len } => {
                write!(f, "Invalid Rank: {k} (expected a rank between 1 and {len})")
            }
            Error::InvalidRange { left, right, len } => write!(
                f,
                "Invalid Range: [{left}, {right}] (slice has {len} elements)"
            ),
            Error::ComparatorUnsupported { algorithm } => {
                write!(f, "{algorithm} only sorts in ascending order")
            }
        }
    }
}
