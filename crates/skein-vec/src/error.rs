//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
///
/// Every variant corresponds to a caller-side contract violation; the
/// container rejects the operation and is left exactly as it was. There
/// is no internal retry or recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VecError {
    /// An index outside the occupied range `[0, len)`.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The container's length at the time of the call.
        len: usize,
    },
    /// An insertion index outside the permitted range `[0, len]`.
    InsertOutOfBounds {
        /// The offending index.
        index: usize,
        /// The container's length at the time of the call.
        len: usize,
    },
    /// A pop from an empty container.
    Empty,
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::InsertOutOfBounds { index, len } => {
                write!(
                    f,
                    "insertion index {index} out of bounds for length {len}"
                )
            }
            Self::Empty => write!(f, "container is empty"),
        }
    }
}

impl Error for VecError {}
