//! Persistent (immutable) singly-linked cons list.
//!
//! This module provides [`List`], the `empty`/`cons` vocabulary that the
//! derived fold functions are written in. A right fold that prepends with
//! `cons` yields elements in their original order, which is what makes
//! fold-derived `map` and `filter` order-preserving; a left fold that
//! prepends yields the reversal.
//!
//! # Overview
//!
//! `List` is a cons list with structural sharing:
//!
//! - O(1) prepend (`cons`)
//! - O(1) head and tail access
//! - O(1) length (cached)
//! - O(n) append
//!
//! All operations return new lists without modifying the original.
//!
//! # Examples
//!
//! ```rust
//! use refold::persistent::List;
//!
//! let list = List::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! // Build from an iterator
//! let list: List<i32> = (1..=5).collect();
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// Internal node structure for the list.
///
/// Using `Rc` enables structural sharing between lists.
struct Node<T> {
    element: T,
    next: Option<Rc<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `head`    | O(1)       |
/// | `tail`    | O(1)       |
/// | `len`     | O(1)       |
/// | `append`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use refold::persistent::List;
///
/// let list = List::singleton(42);
/// assert_eq!(list.head(), Some(&42));
/// ```
#[derive(Clone)]
pub struct List<T> {
    head: Option<Rc<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> List<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::persistent::List;
    ///
    /// let list: List<i32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().cons(element)
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares the structure of the original.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::persistent::List;
    ///
    /// let list = List::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: Some(Rc::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first element.
    ///
    /// Returns an empty list when the list is empty. Shares structure with
    /// the original.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        self.head.as_ref().map_or_else(Self::new, |node| Self {
            head: node.next.clone(),
            length: self.length.saturating_sub(1),
        })
    }

    /// Splits the list into its first element and the rest.
    ///
    /// Returns `None` when the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::persistent::List;
    ///
    /// let list = List::new().cons(2).cons(1);
    /// let (first, rest) = list.uncons().unwrap();
    /// assert_eq!(first, &1);
    /// assert_eq!(rest.head(), Some(&2));
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            (
                &node.element,
                Self {
                    head: node.next.clone(),
                    length: self.length - 1,
                },
            )
        })
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns whether the list is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub const fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_ref(),
        }
    }

    /// Builds a list from a Vec.
    ///
    /// Uses `Vec::pop` to consume elements from the end, so the list comes
    /// out in the same order as the Vec.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<Rc<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }
}

impl<T: Clone> List<T> {
    /// Concatenates two lists.
    ///
    /// The result shares structure with `other`; the elements of `self` are
    /// copied.
    ///
    /// # Complexity
    ///
    /// O(n) in the length of `self`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use refold::persistent::List;
    ///
    /// let left: List<i32> = (1..=2).collect();
    /// let right: List<i32> = (3..=4).collect();
    /// let joined = left.append(&right);
    /// assert_eq!(joined, (1..=4).collect::<List<i32>>());
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let mut prefix: Vec<T> = self.iter().cloned().collect();
        let mut head = other.head.clone();
        let length = self.length + other.length;
        while let Some(element) = prefix.pop() {
            head = Some(Rc::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: Option<&'a Rc<Node<T>>>,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`List`].
pub struct ListIntoIterator<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((head, tail)) = self.list.uncons() {
            let element = head.clone();
            self.list = tail;
            Some(element)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for ListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> Foldable for List<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    // Collect to a Vec and fold it reversed: the innermost combination with
    // the seed happens first, matching the recursive right-fold definition.
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        let elements: Vec<T> = self.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

impl<T: Clone> Semigroup for List<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Clone> Monoid for List<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// Rc-backed, so never Send or Sync.
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(List<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_list_is_empty() {
        let list: List<i32> = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
    }

    #[rstest]
    fn cons_prepends() {
        let list = List::new().cons(3).cons(2).cons(1);
        assert_eq!(list.head(), Some(&1));
        assert_eq!(list.len(), 3);
    }

    #[rstest]
    fn cons_leaves_original_intact() {
        let original = List::new().cons(2).cons(1);
        let extended = original.cons(0);
        assert_eq!(original.len(), 2);
        assert_eq!(original.head(), Some(&1));
        assert_eq!(extended.len(), 3);
        assert_eq!(extended.head(), Some(&0));
    }

    #[rstest]
    fn tail_drops_first_element() {
        let list = List::new().cons(3).cons(2).cons(1);
        let tail = list.tail();
        assert_eq!(tail.head(), Some(&2));
        assert_eq!(tail.len(), 2);
    }

    #[rstest]
    fn tail_of_empty_is_empty() {
        let list: List<i32> = List::new();
        assert!(list.tail().is_empty());
    }

    #[rstest]
    fn uncons_splits_head_and_rest() {
        let list = List::new().cons(2).cons(1);
        let (first, rest) = list.uncons().unwrap();
        assert_eq!(first, &1);
        assert_eq!(rest, List::singleton(2));
        assert_eq!(List::<i32>::new().uncons(), None);
    }

    #[rstest]
    fn from_iterator_preserves_order() {
        let list: List<i32> = (1..=5).collect();
        let collected: Vec<i32> = list.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn into_iterator_yields_owned_elements_in_order() {
        let list: List<i32> = (1..=3).collect();
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn append_concatenates() {
        let left: List<i32> = (1..=2).collect();
        let right: List<i32> = (3..=5).collect();
        let joined = left.append(&right);
        assert_eq!(joined, (1..=5).collect::<List<i32>>());
        assert_eq!(joined.len(), 5);
    }

    #[rstest]
    fn equality_compares_elements_in_order() {
        let left: List<i32> = (1..=3).collect();
        let right = List::new().cons(3).cons(2).cons(1);
        assert_eq!(left, right);
        assert_ne!(left, left.tail());
        assert_ne!(left, List::new().cons(1).cons(2).cons(3));
    }

    #[rstest]
    fn debug_formats_like_a_slice() {
        let list: List<i32> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn fold_left_walks_front_to_back() {
        let list: List<i32> = (1..=3).collect();
        let trace = list.fold_left(String::new(), |mut accumulator, element| {
            accumulator.push_str(&element.to_string());
            accumulator
        });
        assert_eq!(trace, "123");
    }

    #[rstest]
    fn fold_right_preserves_combination_order() {
        let list: List<i32> = (1..=3).collect();
        // f(1, f(2, f(3, ""))) = "123"
        let result = list.fold_right(String::new(), |element, accumulator| {
            format!("{element}{accumulator}")
        });
        assert_eq!(result, "123");
    }

    #[rstest]
    fn semigroup_combine_is_append() {
        let left: List<i32> = (1..=2).collect();
        let right: List<i32> = (3..=4).collect();
        assert_eq!(left.combine(right), (1..=4).collect::<List<i32>>());
    }

    #[rstest]
    fn monoid_empty_is_identity() {
        let list: List<i32> = (1..=3).collect();
        assert_eq!(List::empty().combine(list.clone()), list);
        assert_eq!(list.clone().combine(List::empty()), list);
    }

    #[rstest]
    fn hash_is_consistent_with_equality() {
        use std::collections::HashMap;

        let mut map: HashMap<List<i32>, &str> = HashMap::new();
        let key: List<i32> = (1..=3).collect();
        map.insert(key.clone(), "value");
        assert_eq!(map.get(&key), Some(&"value"));
    }
}
