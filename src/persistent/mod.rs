//! Persistent (immutable) containers folded by the crate's primitives.
//!
//! - [`List`]: a structural-sharing cons list, the `empty`/`cons` vocabulary
//!   of the fold-derived sequence functions
//! - [`BinaryTree`]: a binary tree folded through its in-order flattening
//!
//! Both implement [`Foldable`](crate::typeclass::Foldable), so every fold
//! and derived function in the crate works on them unchanged.

mod list;
mod tree;

pub use list::{List, ListIntoIterator, ListIterator};
pub use tree::BinaryTree;
