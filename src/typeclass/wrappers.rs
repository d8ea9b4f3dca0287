//! Numeric wrapper types for different algebraic operations.
//!
//! The same underlying numeric type supports more than one lawful
//! `Semigroup`/`Monoid`. These newtype wrappers pick one: [`Sum`] combines by
//! addition (identity 0), [`Product`] by multiplication (identity 1). The
//! derived `sum` and `product` functions fold with these wrappers so their
//! empty-sequence results fall out of the monoid identity instead of a
//! special case.

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`, and the identity element is
/// `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use refold::typeclass::{Semigroup, Monoid, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Sum;
    ///
    /// assert_eq!(Sum::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Product Wrapper
// =============================================================================

/// A newtype wrapper that represents the multiplicative semigroup/monoid.
///
/// `Product(a).combine(Product(b))` equals `Product(a * b)`, and the identity
/// element is `Product(1)`.
///
/// # Examples
///
/// ```rust
/// use refold::typeclass::{Semigroup, Monoid, Product};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i32>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Creates a new `Product` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Product` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::typeclass::Product;
    ///
    /// assert_eq!(Product::new(42).into_inner(), 42);
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// Default is deliberately not derived for Product: the default value should
// be the multiplicative identity 1, not the numeric default 0. The Monoid
// impl in `monoid.rs` provides the identity.
