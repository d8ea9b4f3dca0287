//! Classic sequence functions derived from the fold primitives.
//!
//! Every function in this module is a single substitution into
//! [`Foldable::fold_left`], [`Foldable::fold_right`],
//! [`Foldable::fold_left1`], or [`Foldable::fold_right1`]: a combining
//! operation and, where required, a seed. None of them contains any
//! traversal logic of its own, which is the whole point — once the four
//! primitives exist, the rest of a sequence library falls out of them.
//!
//! The orientation of each derivation matters:
//!
//! - `sum`, `reverse`, `last`, `max` use the left fold: strict left-to-right
//!   accumulation, one pass, each step consuming the previous accumulator.
//! - `product`, `length`, `map`, `filter`, `elem`, `head` use the right
//!   fold: each element is combined with the already-computed combination of
//!   everything to its right, which is what lets `cons`-based construction
//!   keep elements in their original order.
//!
//! Functions that build a sequence return the persistent [`List`], whose
//! O(1) `cons` is the constructor the right-fold derivations rely on.
//!
//! # Examples
//!
//! ```rust
//! use refold::derived;
//! use refold::persistent::List;
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//! assert_eq!(derived::filter(numbers, |n| n % 2 == 0), [2, 4, 6].into_iter().collect::<List<i32>>());
//! ```

use crate::error::EmptyInputError;
use crate::persistent::List;
use crate::typeclass::{Foldable, Monoid, Product, Semigroup, Sum};

/// Sums all elements, left to right, starting from zero.
///
/// Derivation: `fold_left(Sum::empty(), combine)` — the additive monoid
/// supplies both the seed (0) and the combining operation.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert_eq!(derived::sum(vec![1, 2, 3, 4, 5]), 15);
/// assert_eq!(derived::sum(Vec::<i32>::new()), 0);
/// ```
pub fn sum<FA>(sequence: FA) -> FA::Inner
where
    FA: Foldable,
    Sum<FA::Inner>: Monoid,
{
    sequence
        .fold_left(Sum::empty(), |accumulator, element| {
            accumulator.combine(Sum(element))
        })
        .into_inner()
}

/// Multiplies all elements, right-associatively, starting from one.
///
/// Derivation: `fold_right(Product::empty(), combine)` — the multiplicative
/// monoid supplies both the seed (1) and the combining operation.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert_eq!(derived::product(vec![1, 2, 3, 4, 5]), 120);
/// assert_eq!(derived::product(Vec::<i32>::new()), 1);
/// ```
pub fn product<FA>(sequence: FA) -> FA::Inner
where
    FA: Foldable,
    Product<FA::Inner>: Monoid,
{
    sequence
        .fold_right(Product::empty(), |element, accumulator| {
            Product(element).combine(accumulator)
        })
        .into_inner()
}

/// Counts the elements.
///
/// Derivation: `fold_right(0, |_, accumulator| accumulator + 1)`.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert_eq!(derived::length(vec!['a', 'b', 'c']), 3);
/// assert_eq!(derived::length(Vec::<char>::new()), 0);
/// ```
pub fn length<FA: Foldable>(sequence: FA) -> usize {
    sequence.fold_right(0, |_, accumulator| accumulator + 1)
}

/// Reverses the sequence.
///
/// Derivation: `fold_left(List::new(), |accumulator, element|
/// accumulator.cons(element))` — prepending under a left fold inverts the
/// order.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
/// use refold::persistent::List;
///
/// let reversed = derived::reverse(vec![1, 2, 3]);
/// assert_eq!(reversed, [3, 2, 1].into_iter().collect::<List<i32>>());
/// ```
pub fn reverse<FA: Foldable>(sequence: FA) -> List<FA::Inner> {
    sequence.fold_left(List::new(), |accumulator, element| {
        accumulator.cons(element)
    })
}

/// Applies a function to every element, preserving order.
///
/// Derivation: `fold_right(List::new(), |element, accumulator|
/// accumulator.cons(function(element)))` — prepending under a right fold
/// preserves the order, because each element is consed onto the
/// already-mapped suffix.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
/// use refold::persistent::List;
///
/// let doubled = derived::map(vec![1, 2, 3], |n| n * 2);
/// assert_eq!(doubled, [2, 4, 6].into_iter().collect::<List<i32>>());
/// ```
pub fn map<FA, B, F>(sequence: FA, mut function: F) -> List<B>
where
    FA: Foldable,
    F: FnMut(FA::Inner) -> B,
{
    sequence.fold_right(List::new(), |element, accumulator| {
        accumulator.cons(function(element))
    })
}

/// Keeps the elements satisfying a predicate, preserving order.
///
/// Derivation: `fold_right(List::new(), |element, accumulator|
/// if predicate { accumulator.cons(element) } else { accumulator })`.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
/// use refold::persistent::List;
///
/// let evens = derived::filter(vec![1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
/// assert_eq!(evens, [2, 4, 6].into_iter().collect::<List<i32>>());
/// ```
pub fn filter<FA, P>(sequence: FA, mut predicate: P) -> List<FA::Inner>
where
    FA: Foldable,
    P: FnMut(&FA::Inner) -> bool,
{
    sequence.fold_right(List::new(), |element, accumulator| {
        if predicate(&element) {
            accumulator.cons(element)
        } else {
            accumulator
        }
    })
}

/// Returns whether the target occurs in the sequence.
///
/// Derivation: `fold_right(false, |element, accumulator|
/// element == target || accumulator)`.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert!(derived::elem(vec![1, 2, 3], &2));
/// assert!(!derived::elem(vec![1, 2, 3], &7));
/// assert!(!derived::elem(Vec::<i32>::new(), &7));
/// ```
pub fn elem<FA>(sequence: FA, target: &FA::Inner) -> bool
where
    FA: Foldable,
    FA::Inner: PartialEq,
{
    sequence.fold_right(false, |element, accumulator| {
        element == *target || accumulator
    })
}

/// Returns the largest element.
///
/// Derivation: `fold_left1(|accumulator, element|
/// if element > accumulator { element } else { accumulator })`.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert_eq!(derived::max(vec![3, 1, 4, 1, 5]), Ok(5));
/// assert!(derived::max(Vec::<i32>::new()).is_err());
/// ```
pub fn max<FA>(sequence: FA) -> Result<FA::Inner, EmptyInputError>
where
    FA: Foldable,
    FA::Inner: PartialOrd,
{
    sequence
        .fold_left1(|accumulator, element| {
            if element > accumulator {
                element
            } else {
                accumulator
            }
        })
        .map_err(|_| EmptyInputError::new("max"))
}

/// Returns the first element.
///
/// Derivation: `fold_right1(|element, _| element)` — the outermost
/// combination of a right fold involves the first element, so keeping the
/// left operand at every step yields it.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert_eq!(derived::head(vec![1, 2, 3]), Ok(1));
/// assert_eq!(derived::head(vec![5]), Ok(5));
/// assert!(derived::head(Vec::<i32>::new()).is_err());
/// ```
pub fn head<FA: Foldable>(sequence: FA) -> Result<FA::Inner, EmptyInputError> {
    sequence
        .fold_right1(|element, _| element)
        .map_err(|_| EmptyInputError::new("head"))
}

/// Returns the last element.
///
/// Derivation: `fold_left1(|_, element| element)` — the final step of a left
/// fold consumes the last element, so keeping the right operand at every
/// step yields it.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use refold::derived;
///
/// assert_eq!(derived::last(vec![1, 2, 3]), Ok(3));
/// assert_eq!(derived::last(vec![5]), Ok(5));
/// assert!(derived::last(Vec::<i32>::new()).is_err());
/// ```
pub fn last<FA: Foldable>(sequence: FA) -> Result<FA::Inner, EmptyInputError> {
    sequence
        .fold_left1(|_, element| element)
        .map_err(|_| EmptyInputError::new("last"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn list_of(elements: &[i32]) -> List<i32> {
        elements.iter().copied().collect()
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5], 15)]
    #[case(vec![], 0)]
    #[case(vec![-3, 3], 0)]
    fn sum_adds_from_zero(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(sum(values), expected);
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5], 120)]
    #[case(vec![], 1)]
    #[case(vec![7], 7)]
    fn product_multiplies_from_one(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(product(values), expected);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![9], 1)]
    #[case(vec![1, 2, 3], 3)]
    fn length_counts_elements(#[case] values: Vec<i32>, #[case] expected: usize) {
        assert_eq!(length(values), expected);
    }

    #[rstest]
    fn reverse_inverts_order() {
        assert_eq!(reverse(vec![1, 2, 3]), list_of(&[3, 2, 1]));
    }

    #[rstest]
    fn reverse_of_empty_is_empty() {
        assert_eq!(reverse(Vec::<i32>::new()), List::new());
    }

    #[rstest]
    fn map_preserves_order() {
        assert_eq!(map(vec![1, 2, 3], |n| n * 10), list_of(&[10, 20, 30]));
    }

    #[rstest]
    fn map_changes_element_type() {
        let lengths = map(vec!["a", "bb", "ccc"], str::len);
        assert_eq!(lengths, [1, 2, 3].into_iter().collect::<List<usize>>());
    }

    #[rstest]
    fn filter_keeps_matching_elements_in_order() {
        let evens = filter(vec![1, 2, 3, 4, 5, 6], |n| n % 2 == 0);
        assert_eq!(evens, list_of(&[2, 4, 6]));
    }

    #[rstest]
    fn filter_of_empty_is_empty() {
        assert_eq!(filter(Vec::<i32>::new(), |_| true), List::new());
    }

    #[rstest]
    #[case(vec![1, 2, 3], 2, true)]
    #[case(vec![1, 2, 3], 7, false)]
    #[case(vec![], 7, false)]
    fn elem_reports_occurrence(
        #[case] values: Vec<i32>,
        #[case] target: i32,
        #[case] expected: bool,
    ) {
        assert_eq!(elem(values, &target), expected);
    }

    #[rstest]
    fn max_finds_largest() {
        assert_eq!(max(vec![3, 1, 4, 1, 5, 9, 2, 6]), Ok(9));
    }

    #[rstest]
    fn max_on_empty_fails_with_named_operation() {
        assert_eq!(max(Vec::<i32>::new()), Err(EmptyInputError::new("max")));
    }

    #[rstest]
    fn head_and_last_pick_the_ends() {
        assert_eq!(head(vec![1, 2, 3]), Ok(1));
        assert_eq!(last(vec![1, 2, 3]), Ok(3));
    }

    #[rstest]
    fn head_last_max_agree_on_singleton() {
        assert_eq!(head(vec![5]), Ok(5));
        assert_eq!(last(vec![5]), Ok(5));
        assert_eq!(max(vec![5]), Ok(5));
    }

    #[rstest]
    fn head_and_last_on_empty_fail_with_named_operation() {
        assert_eq!(head(Vec::<i32>::new()), Err(EmptyInputError::new("head")));
        assert_eq!(last(Vec::<i32>::new()), Err(EmptyInputError::new("last")));
    }

    #[rstest]
    fn derivations_work_over_lists_too() {
        let list = list_of(&[1, 2, 3, 4]);
        assert_eq!(sum(list.clone()), 10);
        assert_eq!(product(list.clone()), 24);
        assert_eq!(head(list.clone()), Ok(1));
        assert_eq!(map(list, |n| n + 1), list_of(&[2, 3, 4, 5]));
    }
}
