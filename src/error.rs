//! Error types for the fold library.
//!
//! This module provides the single failure mode of the crate: asking a
//! seed-less fold variant (`fold_left1`, `fold_right1`, or anything derived
//! from them) to fold a sequence with no elements.

/// Represents an error when a seed-less fold is given an empty sequence.
///
/// The two-argument folds (`fold_left`, `fold_right`) are total: on empty
/// input they return their seed. The one-argument variants take their seed
/// from the first or last element, so an empty sequence leaves them with
/// nothing to return.
///
/// # Examples
///
/// ```rust
/// use refold::error::EmptyInputError;
///
/// let error = EmptyInputError {
///     operation: "fold_left1",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "fold_left1: empty sequence has no elements to fold"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInputError {
    /// The name of the operation that required a non-empty sequence.
    pub operation: &'static str,
}

impl EmptyInputError {
    /// Creates a new error for the named operation.
    #[inline]
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for EmptyInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: empty sequence has no elements to fold",
            self.operation
        )
    }
}

impl std::error::Error for EmptyInputError {}
