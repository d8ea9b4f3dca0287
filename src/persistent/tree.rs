//! Binary tree with fold support via in-order flattening.
//!
//! This module provides [`BinaryTree`], a container whose folds are defined
//! through a single adapter: [`BinaryTree::in_order`] flattens the tree into
//! a [`List`](super::List), and the tree's `Foldable` implementation
//! delegates to that flattening. Tree folding therefore reuses the sequence
//! fold primitives unchanged instead of defining a second traversal
//! discipline.
//!
//! # Examples
//!
//! ```rust
//! use refold::persistent::BinaryTree;
//! use refold::typeclass::Foldable;
//!
//! //     2
//! //    / \
//! //   1   3
//! let tree = BinaryTree::node(
//!     BinaryTree::singleton(1),
//!     2,
//!     BinaryTree::singleton(3),
//! );
//!
//! assert_eq!(tree.clone().in_order().to_list(), vec![1, 2, 3]);
//! assert_eq!(tree.fold_left(0, |accumulator, element| accumulator + element), 6);
//! ```

use crate::typeclass::{Foldable, TypeConstructor};

use super::list::List;

/// An immutable binary tree.
///
/// A tree is either an empty `Leaf` or a `Node` carrying an element and two
/// subtrees. Elements are visited in-order (left subtree, element, right
/// subtree) by every fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryTree<T> {
    /// The empty tree.
    Leaf,
    /// A node with an element and two subtrees.
    Node {
        /// The left subtree.
        left: Box<BinaryTree<T>>,
        /// The element stored at this node.
        element: T,
        /// The right subtree.
        right: Box<BinaryTree<T>>,
    },
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree.
    #[inline]
    #[must_use]
    pub const fn leaf() -> Self {
        Self::Leaf
    }

    /// Creates a node from an element and two subtrees.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::persistent::BinaryTree;
    ///
    /// let tree = BinaryTree::node(BinaryTree::leaf(), 1, BinaryTree::singleton(2));
    /// assert!(!tree.is_leaf());
    /// ```
    #[must_use]
    pub fn node(left: Self, element: T, right: Self) -> Self {
        Self::Node {
            left: Box::new(left),
            element,
            right: Box::new(right),
        }
    }

    /// Creates a tree containing a single element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::node(Self::Leaf, element, Self::Leaf)
    }

    /// Returns whether the tree is empty.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Flattens the tree into a list by in-order traversal.
    ///
    /// This is the adapter that connects trees to the sequence fold
    /// primitives: folding the returned list is folding the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::persistent::{BinaryTree, List};
    ///
    /// let tree = BinaryTree::node(
    ///     BinaryTree::singleton('a'),
    ///     'b',
    ///     BinaryTree::singleton('c'),
    /// );
    /// assert_eq!(tree.in_order(), ['a', 'b', 'c'].into_iter().collect::<List<char>>());
    /// ```
    #[must_use]
    pub fn in_order(self) -> List<T> {
        let mut elements = Vec::new();
        self.collect_in_order(&mut elements);
        elements.into_iter().collect()
    }

    fn collect_in_order(self, elements: &mut Vec<T>) {
        if let Self::Node {
            left,
            element,
            right,
        } = self
        {
            left.collect_in_order(elements);
            elements.push(element);
            right.collect_in_order(elements);
        }
    }
}

impl<T> Default for BinaryTree<T> {
    #[inline]
    fn default() -> Self {
        Self::Leaf
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for BinaryTree<T> {
    type Inner = T;
    type WithType<B> = BinaryTree<B>;
}

/// Folds visit elements in in-order position, by delegating to the
/// [`BinaryTree::in_order`] flattening.
impl<T: Clone> Foldable for BinaryTree<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.in_order().fold_left(init, function)
    }

    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.in_order().fold_right(init, function)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_leaf()
    }
}

// =============================================================================
// Tests
// =============================================================================
