//! Type class traits for the fold library.
//!
//! This module provides the algebraic foundation of the crate:
//!
//! - [`Foldable`]: the fold primitives over ordered finite containers
//! - [`Semigroup`]: associative binary operations
//! - [`Monoid`]: semigroups with an identity element
//! - [`TypeConstructor`]: GAT-based higher-kinded type emulation
//! - [`Sum`], [`Product`]: numeric wrappers selecting a monoid operation
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so `Foldable` cannot be written
//! directly over a bare constructor like `Vec<_>`. [`TypeConstructor`] uses
//! Generic Associated Types to emulate the abstraction, which lets the fold
//! primitives be defined once and implemented for `Option`, `Vec`, the
//! persistent [`List`](crate::persistent::List), and the
//! [`BinaryTree`](crate::persistent::BinaryTree) adapter.
//!
//! # Examples
//!
//! ```rust
//! use refold::typeclass::{Foldable, Semigroup, Monoid, Sum};
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(numbers.fold_left(0, |accumulator, element| accumulator + element), 6);
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;
mod wrappers;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};
