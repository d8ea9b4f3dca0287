//! Concrete scenarios for the fold-derived sequence functions, exercised
//! across every container the crate can fold.

use refold::derived;
use refold::error::EmptyInputError;
use refold::persistent::{BinaryTree, List};
use refold::typeclass::Foldable;
use rstest::rstest;

fn list_of(elements: &[i32]) -> List<i32> {
    elements.iter().copied().collect()
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[rstest]
fn sum_of_one_through_five_is_fifteen() {
    assert_eq!(derived::sum(vec![1, 2, 3, 4, 5]), 15);
}

#[rstest]
fn product_of_one_through_five_is_one_hundred_twenty() {
    assert_eq!(derived::product(vec![1, 2, 3, 4, 5]), 120);
}

#[rstest]
fn filter_keeps_even_numbers() {
    let evens = derived::filter(vec![1, 2, 3, 4, 5, 6], |element| element % 2 == 0);
    assert_eq!(evens, list_of(&[2, 4, 6]));
}

#[rstest]
fn reverse_of_one_two_three() {
    assert_eq!(derived::reverse(vec![1, 2, 3]), list_of(&[3, 2, 1]));
}

#[rstest]
fn length_of_empty_is_zero() {
    assert_eq!(derived::length(Vec::<i32>::new()), 0);
}

#[rstest]
fn elem_on_empty_is_false() {
    assert!(!derived::elem(Vec::<i32>::new(), &1));
}

#[rstest]
fn head_last_max_agree_on_singleton() {
    assert_eq!(derived::head(vec![5]), Ok(5));
    assert_eq!(derived::last(vec![5]), Ok(5));
    assert_eq!(derived::max(vec![5]), Ok(5));
}

#[rstest]
#[case::head("head")]
#[case::last("last")]
#[case::max("max")]
fn seedless_derivations_fail_on_empty(#[case] operation: &'static str) {
    let empty: Vec<i32> = vec![];
    let error = match operation {
        "head" => derived::head(empty).unwrap_err(),
        "last" => derived::last(empty).unwrap_err(),
        _ => derived::max(empty).unwrap_err(),
    };
    assert_eq!(error, EmptyInputError::new(operation));
}

// =============================================================================
// The same derivations over the persistent list
// =============================================================================

#[rstest]
fn derivations_over_persistent_list() {
    let list = list_of(&[1, 2, 3, 4, 5]);
    assert_eq!(derived::sum(list.clone()), 15);
    assert_eq!(derived::product(list.clone()), 120);
    assert_eq!(derived::length(list.clone()), 5);
    assert_eq!(derived::head(list.clone()), Ok(1));
    assert_eq!(derived::last(list.clone()), Ok(5));
    assert!(derived::elem(list.clone(), &3));
    assert_eq!(derived::reverse(list), list_of(&[5, 4, 3, 2, 1]));
}

#[rstest]
fn map_over_persistent_list_preserves_order() {
    let doubled = derived::map(list_of(&[1, 2, 3]), |element| element * 2);
    assert_eq!(doubled, list_of(&[2, 4, 6]));
}

// =============================================================================
// The same derivations over the binary tree, via in-order flattening
// =============================================================================

fn sample_tree() -> BinaryTree<i32> {
    BinaryTree::node(
        BinaryTree::node(BinaryTree::singleton(1), 2, BinaryTree::singleton(3)),
        4,
        BinaryTree::singleton(5),
    )
}

#[rstest]
fn derivations_over_binary_tree() {
    assert_eq!(derived::sum(sample_tree()), 15);
    assert_eq!(derived::product(sample_tree()), 120);
    assert_eq!(derived::length(sample_tree()), 5);
    assert_eq!(derived::head(sample_tree()), Ok(1));
    assert_eq!(derived::last(sample_tree()), Ok(5));
    assert_eq!(derived::max(sample_tree()), Ok(5));
}

#[rstest]
fn tree_map_follows_in_order_position() {
    let mapped = derived::map(sample_tree(), |element| element * 10);
    assert_eq!(mapped, list_of(&[10, 20, 30, 40, 50]));
}

#[rstest]
fn tree_fold_agrees_with_flattened_list_fold() {
    let via_tree = sample_tree().fold_right(String::new(), |element, accumulator| {
        format!("{element}{accumulator}")
    });
    let via_list = sample_tree()
        .in_order()
        .fold_right(String::new(), |element, accumulator| {
            format!("{element}{accumulator}")
        });
    assert_eq!(via_tree, via_list);
}

// =============================================================================
// Derivations over Option, the one-or-zero-element container
// =============================================================================

#[rstest]
fn derivations_over_option() {
    assert_eq!(derived::sum(Some(5)), 5);
    assert_eq!(derived::sum(None::<i32>), 0);
    assert_eq!(derived::length(Some('x')), 1);
    assert_eq!(derived::head(Some(5)), Ok(5));
    assert_eq!(
        derived::head(None::<i32>),
        Err(EmptyInputError::new("head"))
    );
}
