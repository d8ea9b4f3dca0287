//! Semigroup type class - associative binary operations.
//!
//! A semigroup is a type with an associative binary operation `combine`.
//! It is the algebraic backbone of folding: folding a sequence with a
//! semigroup operation gives the same result regardless of how the
//! combinations are grouped.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use refold::typeclass::Semigroup;
//!
//! // String concatenation
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! // Vec concatenation
//! let left = vec![1, 2];
//! let right = vec![3, 4];
//! assert_eq!(left.combine(right), vec![1, 2, 3, 4]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy associativity:
///
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values using the associative operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning as needed.
    ///
    /// Types can override this for more efficient implementations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// let result = a.combine_ref(&b);
    /// // Original values are still available
    /// assert_eq!(a, "Hello, ");
    /// assert_eq!(result, "Hello, World!");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that returns
    /// the identity element for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("ab")));
    ///
    /// let empty: Vec<String> = vec![];
    /// assert_eq!(String::reduce_all(empty), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum combines by addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product combines by multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}
