//! Unit tests for FingerTree.
//!
//! These tests exercise the public operations of the tree: construction,
//! pushing and viewing at both ends, concatenation, splitting and iteration.

use fingertree::persistent::{FingerTree, FingerTreeError};
use fingertree::typeclass::{Max, Measured, Monoid, Semigroup, Sum};
use rstest::rstest;

// =============================================================================
// Measured element types
// =============================================================================

/// A character counted as one element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Item(char);

impl Measured for Item {
    type Measure = Sum<usize>;

    fn measure(&self) -> Sum<usize> {
        Sum::new(1)
    }
}

/// A named task measured by its priority.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Task {
    name: char,
    priority: u32,
}

impl Measured for Task {
    type Measure = Option<Max<u32>>;

    fn measure(&self) -> Option<Max<u32>> {
        Some(Max::new(self.priority))
    }
}

fn tree_of(text: &str) -> FingerTree<Item> {
    text.chars()
        .fold(FingerTree::new(), |tree, letter| tree.push_back(Item(letter)))
}

fn text_of(tree: &FingerTree<Item>) -> String {
    tree.iter().map(|item| item.0).collect()
}

fn reversed_text_of(tree: &FingerTree<Item>) -> String {
    tree.iter_rev().map(|item| item.0).collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree: FingerTree<Item> = FingerTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.measure(), Sum::new(0));
    assert_eq!(tree.front(), None);
    assert_eq!(tree.back(), None);
}

#[rstest]
fn test_default_and_monoid_empty_match_new() {
    let default: FingerTree<Item> = FingerTree::default();
    let empty: FingerTree<Item> = FingerTree::empty();
    assert!(default.is_empty());
    assert!(empty.is_empty());
}

#[rstest]
fn test_singleton_holds_one_value() {
    let tree = FingerTree::singleton(Item('a'));
    assert!(!tree.is_empty());
    assert_eq!(tree.measure(), Sum::new(1));
    assert_eq!(tree.front(), Some(&Item('a')));
    assert_eq!(tree.back(), Some(&Item('a')));
}

// =============================================================================
// Push and view
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
#[case(9)]
#[case(100)]
fn test_push_back_preserves_order(#[case] size: usize) {
    let text: String = ('a'..='z').cycle().take(size).collect();
    let tree = tree_of(&text);
    assert_eq!(text_of(&tree), text);
    assert_eq!(tree.measure(), Sum::new(size));
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(100)]
fn test_push_front_reverses_order(#[case] size: usize) {
    let text: String = ('a'..='z').cycle().take(size).collect();
    let tree = text
        .chars()
        .fold(FingerTree::new(), |tree, letter| tree.push_front(Item(letter)));
    let reversed: String = text.chars().rev().collect();
    assert_eq!(text_of(&tree), reversed);
}

#[rstest]
fn test_push_does_not_modify_original() {
    let original = tree_of("abc");
    let extended = original.push_back(Item('d')).push_front(Item('z'));
    assert_eq!(text_of(&original), "abc");
    assert_eq!(text_of(&extended), "zabcd");
}

#[rstest]
fn test_view_front_returns_first_and_rest() {
    let tree = tree_of("abcdefghij");
    let (first, rest) = tree.view_front().unwrap();
    assert_eq!(first, &Item('a'));
    assert_eq!(text_of(&rest), "bcdefghij");
    assert_eq!(rest.measure(), Sum::new(9));
}

#[rstest]
fn test_view_back_returns_rest_and_last() {
    let tree = tree_of("abcdefghij");
    let (rest, last) = tree.view_back().unwrap();
    assert_eq!(last, &Item('j'));
    assert_eq!(text_of(&rest), "abcdefghi");
}

#[rstest]
fn test_view_on_single_leaves_empty_tree() {
    let tree = FingerTree::singleton(Item('a'));
    let (first, rest) = tree.view_front().unwrap();
    assert_eq!(first, &Item('a'));
    assert!(rest.is_empty());
}

#[rstest]
fn test_view_on_empty_is_none() {
    let tree: FingerTree<Item> = FingerTree::new();
    assert!(tree.view_front().is_none());
    assert!(tree.view_back().is_none());
}

#[rstest]
fn test_repeated_view_front_drains_tree() {
    let mut tree = tree_of("abcdefghijklmnopqrstuvwxyz");
    let mut drained = String::new();
    while let Some((first, rest)) = tree.view_front().map(|(first, rest)| (first.0, rest)) {
        drained.push(first);
        tree = rest;
    }
    assert_eq!(drained, "abcdefghijklmnopqrstuvwxyz");
}

// =============================================================================
// Concatenation
// =============================================================================

#[rstest]
#[case("", "", "")]
#[case("abc", "", "")]
#[case("", "", "abc")]
#[case("a", "b", "c")]
#[case("abcdefghij", "", "klmnopqrst")]
#[case("abcdefghijklmnopqrstuvwxyz", "0123", "ABCDEFGHIJKLMNOPQRSTUVWXYZ")]
fn test_concatenate_joins_in_order(#[case] left: &str, #[case] middle: &str, #[case] right: &str) {
    let joined = FingerTree::concatenate(
        &tree_of(left),
        middle.chars().map(Item),
        &tree_of(right),
    );
    let expected = format!("{left}{middle}{right}");
    assert_eq!(text_of(&joined), expected);
    assert_eq!(joined.measure(), Sum::new(expected.len()));
}

#[rstest]
fn test_append_and_combine_agree() {
    let left = tree_of("abc");
    let right = tree_of("def");
    assert_eq!(left.append(&right), left.clone().combine(right.clone()));
    assert_eq!(text_of(&left.append(&right)), "abcdef");
}

// =============================================================================
// Split
// =============================================================================

#[rstest]
fn test_split_by_count_finds_sixth_element() {
    let tree = tree_of("abcdefghij");
    assert_eq!(text_of(&tree), "abcdefghij");

    let split = tree.split(|count| count.0 > 5, Sum::new(0)).unwrap();
    assert_eq!(text_of(&split.left), "abcde");
    assert_eq!(split.element, &Item('f'));
    assert_eq!(text_of(&split.right), "ghij");
}

#[rstest]
fn test_split_by_priority_finds_maximum() {
    let tree = [('x', 3), ('y', 5), ('z', 1)]
        .into_iter()
        .fold(FingerTree::new(), |tree, (name, priority)| {
            tree.push_back(Task { name, priority })
        });
    let total = tree.measure();

    let split = tree
        .split(|running| *running == total, Option::empty())
        .unwrap();
    assert_eq!(split.element.name, 'y');
    assert_eq!(split.left.measure(), Some(Max::new(3)));
    assert_eq!(split.right.measure(), Some(Max::new(1)));
}

#[rstest]
fn test_split_on_empty_tree_is_not_found() {
    let tree: FingerTree<Item> = FingerTree::new();
    let result = tree.split(|count| count.0 > 0, Sum::new(0));
    assert_eq!(result.err(), Some(FingerTreeError::NotFound));
}

#[rstest]
fn test_split_past_the_end_is_not_found() {
    let tree = tree_of("abc");
    let result = tree.split(|count| count.0 > 3, Sum::new(0));
    assert_eq!(result.err(), Some(FingerTreeError::NotFound));
}

#[rstest]
fn test_split_already_true_at_start_is_not_found() {
    let tree = tree_of("abc");
    let result = tree.split(|count| count.0 > 1, Sum::new(2));
    assert_eq!(result.err(), Some(FingerTreeError::NotFound));
}

#[rstest]
fn test_split_offsets_by_start() {
    let tree = tree_of("abcdefghij");
    let split = tree.split(|count| count.0 > 5, Sum::new(2)).unwrap();
    assert_eq!(text_of(&split.left), "abc");
    assert_eq!(split.element, &Item('d'));
    assert_eq!(text_of(&split.right), "efghij");
}

#[rstest]
fn test_split_does_not_modify_original() {
    let tree = tree_of("abcdefghij");
    let _ = tree.split(|count| count.0 > 5, Sum::new(0)).unwrap();
    assert_eq!(text_of(&tree), "abcdefghij");
}

#[rstest]
#[case(0, "", "abcdefghij")]
#[case(4, "abcd", "efghij")]
#[case(10, "abcdefghij", "")]
fn test_split_off_partitions_tree(#[case] at: usize, #[case] left: &str, #[case] right: &str) {
    let tree = tree_of("abcdefghij");
    let (before, after) = tree.split_off(|count| count.0 > at);
    assert_eq!(text_of(&before), left);
    assert_eq!(text_of(&after), right);
}

// =============================================================================
// Iteration and formatting
// =============================================================================

#[rstest]
#[case("")]
#[case("a")]
#[case("abcdefghijklmnopqrstuvwxyz")]
fn test_iter_rev_is_reverse_of_iter(#[case] text: &str) {
    let tree = tree_of(text);
    let reversed: String = text.chars().rev().collect();
    assert_eq!(reversed_text_of(&tree), reversed);
}

#[rstest]
fn test_iter_is_restartable() {
    let tree = tree_of("abc");
    assert_eq!(tree.iter().count(), 3);
    assert_eq!(tree.iter().count(), 3);
    let collected: Vec<&Item> = (&tree).into_iter().collect();
    assert_eq!(collected, vec![&Item('a'), &Item('b'), &Item('c')]);
}

#[rstest]
fn test_debug_formats_as_list() {
    let tree = tree_of("ab");
    assert_eq!(format!("{tree:?}"), "[Item('a'), Item('b')]");
}

#[rstest]
fn test_equal_sequences_hash_equally() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(tree: &FingerTree<Item>) -> u64 {
        let mut hasher = DefaultHasher::new();
        tree.hash(&mut hasher);
        hasher.finish()
    }

    let pushed_back = tree_of("abcdefg");
    let concatenated = tree_of("abc").append(&tree_of("defg"));
    assert_eq!(pushed_back, concatenated);
    assert_eq!(hash_of(&pushed_back), hash_of(&concatenated));
}
