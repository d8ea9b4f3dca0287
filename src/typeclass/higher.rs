//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over bare type constructors like `Option<_>` or
//! `Vec<_>`, which is what a container-generic fold needs. This module works
//! around that with a Generic Associated Type: a container states which
//! element type it currently holds (`Inner`) and how to name itself holding a
//! different one (`WithType<B>`). [`Foldable`](super::Foldable) builds on
//! this, so the fold primitives are written once and reused across every
//! container in the crate.

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated
/// Types. It allows abstracting over type constructors like `Option<_>`,
/// `Vec<_>`, or the crate's own sequence types.
///
/// # Associated Types
///
/// - `Inner`: The element type this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use refold::typeclass::TypeConstructor;
///
/// fn assert_element_type<T: TypeConstructor<Inner = i32>>() {}
///
/// assert_element_type::<Option<i32>>();
/// assert_element_type::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Vec<i32>`, this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Vec<i32>`, `WithType<String>` is `Vec<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
