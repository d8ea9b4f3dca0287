//! # refold
//!
//! Generic left and right folds over finite sequences, with non-empty-seed
//! variants and the classic sequence functions derived from them.
//!
//! ## Overview
//!
//! The crate is built around a single abstraction, [`typeclass::Foldable`],
//! which exposes four entry points:
//!
//! - `fold_left`: strict left-to-right accumulation from an explicit seed
//! - `fold_right`: right-associated combination from an explicit seed
//! - `fold_left1`: left fold seeded by the first element, fails on empty input
//! - `fold_right1`: right fold seeded by the last element, fails on empty input
//!
//! Everything else in the crate is a specialization of these four. The
//! [`derived`] module derives `sum`, `product`, `length`, `reverse`, `map`,
//! `filter`, `elem`, `max`, `head`, and `last` purely by substituting a
//! combining operation (and, where needed, a seed) into a fold; none of them
//! contains any independent control flow.
//!
//! Order-preserving construction (`map`, `filter`, `reverse`) is expressed
//! with the persistent cons list [`persistent::List`], whose O(1) `cons`
//! under a right fold yields elements in their original order.
//!
//! ## Example
//!
//! ```rust
//! use refold::derived;
//! use refold::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(derived::sum(numbers.clone()), 15);
//! assert_eq!(derived::product(numbers.clone()), 120);
//!
//! let doubled = derived::map(numbers, |n| n * 2);
//! assert_eq!(doubled.to_list(), vec![2, 4, 6, 8, 10]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use refold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::derived;
    pub use crate::error::EmptyInputError;
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod derived;
pub mod error;
pub mod persistent;
pub mod typeclass;
