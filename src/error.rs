//! Errors raised by [`OrderedSetMap`](crate::OrderedSetMap) operations.
//!
//! Absent elements are not errors: lookups and removals report them
//! as `None`.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error raised by a failing set operation.
///
/// A failed operation never modifies the set it was called on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Positional access outside of `[0, len)`.
    #[error("index out of range: the index is {index} but the length is {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the set at the time of the access.
        len: usize,
    },
    /// A type-erased operand was not a set of the expected element type.
    #[error("type mismatch: expected an operand of type `{expected}`")]
    TypeMismatch {
        /// Name of the set type the operation required.
        expected: &'static str,
    },
}
