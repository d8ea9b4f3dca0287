//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. In other words, a type
//! `T` is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! The identity element is what lets a fold over a possibly-empty sequence
//! return a meaningful value: `sum` folds from `Sum::empty()` (zero) and
//! `product` from `Product::empty()` (one).
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use refold::typeclass::{Semigroup, Monoid};
///
/// // Combining with empty yields the original value
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::{Monoid, Sum, Product};
    ///
    /// assert_eq!(String::empty(), "");
    /// assert_eq!(Sum::<i32>::empty(), Sum(0));
    /// assert_eq!(Product::<i32>::empty(), Product(1));
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::{Monoid, Sum};
    ///
    /// let numbers = vec![Sum(1), Sum(2), Sum(3)];
    /// assert_eq!(Sum::combine_all(numbers), Sum(6));
    ///
    /// let empty: Vec<Sum<i32>> = vec![];
    /// assert_eq!(Sum::combine_all(empty), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Numeric Wrapper Implementations
// =============================================================================

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Product forms a monoid under multiplication with 1 as the identity.
///
/// Per-type impls are required since `Default` returns 0 for numbers.
macro_rules! product_monoid {
    ($($numeric:ty => $one:expr),* $(,)?) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )*
    };
}

product_monoid! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
}
