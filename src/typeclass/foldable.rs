//! Foldable type class - the fold primitives over finite sequences.
//!
//! This module provides the [`Foldable`] trait: an ordered, finite container
//! whose elements can be combined into a single value. Four entry points are
//! exposed:
//!
//! - [`Foldable::fold_left`]: strict left-to-right accumulation from a seed
//! - [`Foldable::fold_right`]: right-associated combination from a seed
//! - [`Foldable::fold_left1`]: left fold seeded by the first element
//! - [`Foldable::fold_right1`]: right fold seeded by the last element
//!
//! The seedless variants fail with [`EmptyInputError`] on empty input; the
//! seeded variants return their seed unchanged.
//!
//! # Choosing an orientation
//!
//! `fold_left` consumes elements in strictly increasing index order, building
//! the accumulator incrementally. Use it when processing order matches
//! left-to-right consumption and a strict single pass is wanted (sum, length,
//! building a reversed sequence).
//!
//! `fold_right` computes `f(e0, f(e1, ... f(en-1, seed)))`: each element is
//! combined with the already-computed combination of everything to its right.
//! This is the orientation that makes order-preserving construction by
//! prepending work (map, filter over a cons list). Over strict finite
//! sequences it is computed by reverse iteration, which produces exactly that
//! combination order.
//!
//! # Laws
//!
//! For associative operations, the two orientations agree:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))  // when f is associative
//! ```
//!
//! And folding is consistent with `to_list`:
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().fold_left(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use refold::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//! ```

use crate::error::EmptyInputError;

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for ordered finite containers that can be folded to a
/// summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// Every provided method is itself a fold specialization with no independent
/// control flow:
///
/// - `fold_left1` / `fold_right1`: seedless folds over non-empty input
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`, `length`, `to_list`, `find`, `exists`, `for_all`
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an explicit seed.
    ///
    /// Visits elements in strictly increasing index order; each step computes
    /// `accumulator = function(accumulator, element)`. Returns `init`
    /// unchanged on an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure right-associatively with an explicit seed.
    ///
    /// Computes `function(e0, function(e1, ... function(en-1, init)))`: each
    /// element is combined with the already-computed combination of all
    /// elements to its right. Returns `init` unchanged on an empty
    /// structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// // f(1, f(2, f(3, ""))) = "123"
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Folds a non-empty structure from the left, seeded by its first element.
    ///
    /// Equivalent to `fold_left(first, rest)`, expressed as a `fold_left`
    /// that threads the seed through an `Option` accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when the structure has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_left1(|accumulator, element| accumulator - element);
    /// assert_eq!(result, Ok(-4)); // (1 - 2) - 3
    /// ```
    fn fold_left1<F>(self, mut function: F) -> Result<Self::Inner, EmptyInputError>
    where
        F: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            Some(match accumulator {
                None => element,
                Some(value) => function(value, element),
            })
        })
        .ok_or(EmptyInputError::new("fold_left1"))
    }

    /// Folds a non-empty structure right-associatively, seeded by its last
    /// element.
    ///
    /// Equivalent to `fold_right` over all but the last element with the last
    /// element as seed, expressed as a `fold_right` that threads the seed
    /// through an `Option` accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyInputError`] when the structure has no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right1(|element, accumulator| element - accumulator);
    /// assert_eq!(result, Ok(2)); // 1 - (2 - 3)
    /// ```
    fn fold_right1<F>(self, mut function: F) -> Result<Self::Inner, EmptyInputError>
    where
        F: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
        Self: Sized,
    {
        self.fold_right(None, |element, accumulator| {
            Some(match accumulator {
                None => element,
                Some(value) => function(element, value),
            })
        })
        .ok_or(EmptyInputError::new("fold_right1"))
    }

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::{Foldable, Sum, Product};
    ///
    /// let values = vec![1, 2, 3, 4];
    ///
    /// let sum: Sum<i32> = values.clone().fold_map(Sum);
    /// assert_eq!(sum.0, 10);
    ///
    /// let product: Product<i32> = values.fold_map(Product);
    /// assert_eq!(product.0, 24);
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// assert!(!vec![1, 2, 3].is_empty());
    /// assert!(Vec::<i32>::new().is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// assert_eq!(Vec::<i32>::new().length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements in fold
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// assert_eq!(Some(42).to_list(), vec![42]);
    /// assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find(|element| *element > 3), Some(4));
    /// assert_eq!(values.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert!(values.exists(|element| *element > 3));
    /// assert!(!values.exists(|element| *element > 10));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` on an empty structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Foldable;
    ///
    /// let values = vec![2, 4, 6, 8];
    /// assert!(values.for_all(|element| *element % 2 == 0));
    /// assert!(!values.for_all(|element| *element > 5));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    // Reverse iteration: the innermost combination f(en-1, init) happens
    // first, which is exactly the combination order of the recursive
    // definition.
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================


// =============================================================================
// Property-Based Tests
// =============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_fold_left_fold_right_agree_for_addition(
            values in prop::collection::vec(-1000i64..1000, 0..50)
        ) {
            let left = values
                .clone()
                .fold_left(0i64, |accumulator, element| accumulator + element);
            let right = values.fold_right(0i64, |element, accumulator| element + accumulator);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_length_equals_len(values in prop::collection::vec(any::<i32>(), 0..100)) {
            prop_assert_eq!(values.length(), values.len());
        }

        #[test]
        fn prop_is_empty_matches_len(values in prop::collection::vec(any::<i32>(), 0..100)) {
            prop_assert_eq!(Foldable::is_empty(&values), values.len() == 0);
        }

        #[test]
        fn prop_fold_left1_matches_iterator_reduce(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            let expected = values.clone().into_iter().reduce(i32::min);
            let folded = values.fold_left1(i32::min).ok();
            prop_assert_eq!(folded, expected);
        }

        #[test]
        fn prop_fold_right1_matches_reverse_reduce(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            // max is associative and commutative, so seeding from the last
            // element agrees with seeding from the first.
            let expected = values.clone().into_iter().reduce(i32::max);
            let folded = values.fold_right1(i32::max).ok();
            prop_assert_eq!(folded, expected);
        }

        #[test]
        fn prop_seedless_folds_fail_only_on_empty(
            values in prop::collection::vec(any::<i32>(), 0..10)
        ) {
            let is_input_empty = values.len() == 0;
            let left = values.clone().fold_left1(|accumulator, _| accumulator);
            let right = values.fold_right1(|element, _| element);
            prop_assert_eq!(left.is_err(), is_input_empty);
            prop_assert_eq!(right.is_err(), is_input_empty);
        }

        #[test]
        fn prop_fold_consistent_with_to_list(
            values in prop::collection::vec(any::<i32>(), 0..50)
        ) {
            let direct = values
                .clone()
                .fold_left(0i64, |accumulator, element| accumulator + i64::from(element));
            let via_list = values
                .to_list()
                .fold_left(0i64, |accumulator, element| accumulator + i64::from(element));
            prop_assert_eq!(direct, via_list);
        }
    }
}
