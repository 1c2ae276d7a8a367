//! The recursive tree: empty, single, or deep with a nested interior.
//!
//! Every function here is generic over the element tag, not over depth: the
//! interior of a `Tree<T>` is another `Tree<T>` whose elements happen to be
//! [`Element::Node`]s. Deep nodes sit behind a [`ReferenceCounter`] so that
//! cloning a tree is O(1) and every untouched subtree is shared between the
//! old and the new version.

use smallvec::SmallVec;

use super::affix::{Affix, CAPACITY, Digit};
use super::node::Element;
use crate::persistent::ReferenceCounter;
use crate::typeclass::{Measured, Monoid, Semigroup};

/// Inline capacity for the elements between two trees being concatenated:
/// one suffix and one prefix of up to four elements each, plus up to four
/// nodes carried down from the level above.
pub(crate) const JOIN_CAPACITY: usize = 12;

pub(crate) type Joint<T> = SmallVec<[Element<T>; JOIN_CAPACITY]>;

pub(crate) enum Tree<T: Measured> {
    Empty,
    Single(Element<T>),
    Deep(ReferenceCounter<Deep<T>>),
}

pub(crate) struct Deep<T: Measured> {
    pub(crate) measure: T::Measure,
    pub(crate) prefix: Affix<T>,
    pub(crate) middle: Tree<T>,
    pub(crate) suffix: Affix<T>,
}

impl<T: Measured> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Single(element) => Self::Single(element.clone()),
            Self::Deep(deep) => Self::Deep(deep.clone()),
        }
    }
}

impl<T: Measured> Tree<T> {
    /// Builds a deep tree, caching `prefix · middle · suffix`.
    pub(crate) fn deep(prefix: Affix<T>, middle: Self, suffix: Affix<T>) -> Self {
        let measure = prefix
            .measure()
            .clone()
            .combine(middle.measure())
            .combine(suffix.measure().clone());
        Self::Deep(ReferenceCounter::new(Deep {
            measure,
            prefix,
            middle,
            suffix,
        }))
    }

    pub(crate) const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn measure(&self) -> T::Measure {
        match self {
            Self::Empty => T::Measure::empty(),
            Self::Single(element) => element.measure(),
            Self::Deep(deep) => deep.measure.clone(),
        }
    }

    pub(crate) fn front(&self) -> Option<&Element<T>> {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some(element),
            Self::Deep(deep) => Some(deep.prefix.head()),
        }
    }

    pub(crate) fn back(&self) -> Option<&Element<T>> {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some(element),
            Self::Deep(deep) => Some(deep.suffix.last()),
        }
    }

    /// Spreads up to four elements over a fresh tree with an empty interior.
    pub(crate) fn from_affix(affix: &Affix<T>) -> Self {
        match affix.digit() {
            Digit::One(first) => Self::Single(first.clone()),
            Digit::Two(first, second) => Self::deep(
                Affix::one(first.clone()),
                Self::Empty,
                Affix::one(second.clone()),
            ),
            Digit::Three(first, second, third) => Self::deep(
                Affix::two(first.clone(), second.clone()),
                Self::Empty,
                Affix::one(third.clone()),
            ),
            Digit::Four(first, second, third, fourth) => Self::deep(
                Affix::two(first.clone(), second.clone()),
                Self::Empty,
                Affix::two(third.clone(), fourth.clone()),
            ),
        }
    }

    pub(crate) fn from_slice(elements: &[Element<T>]) -> Self {
        Affix::from_slice(elements).map_or_else(
            || {
                elements
                    .iter()
                    .cloned()
                    .fold(Self::Empty, |tree, element| tree.push_back(element))
            },
            |affix| Self::from_affix(&affix),
        )
    }

    // =========================================================================
    // Push
    // =========================================================================

    pub(crate) fn push_front(&self, element: Element<T>) -> Self {
        match self {
            Self::Empty => Self::Single(element),
            Self::Single(existing) => {
                Self::deep(Affix::one(element), Self::Empty, Affix::one(existing.clone()))
            }
            Self::Deep(deep) => match deep.prefix.digit() {
                Digit::Four(first, second, third, fourth) => {
                    let node = Element::node3(second.clone(), third.clone(), fourth.clone());
                    Self::deep(
                        Affix::two(element, first.clone()),
                        deep.middle.push_front(node),
                        deep.suffix.clone(),
                    )
                }
                Digit::One(_) | Digit::Two(..) | Digit::Three(..) => {
                    match deep.prefix.prepend(element) {
                        Ok(prefix) => Self::deep(prefix, deep.middle.clone(), deep.suffix.clone()),
                        Err(error) => unreachable!("{error} below capacity"),
                    }
                }
            },
        }
    }

    pub(crate) fn push_back(&self, element: Element<T>) -> Self {
        match self {
            Self::Empty => Self::Single(element),
            Self::Single(existing) => {
                Self::deep(Affix::one(existing.clone()), Self::Empty, Affix::one(element))
            }
            Self::Deep(deep) => match deep.suffix.digit() {
                Digit::Four(first, second, third, fourth) => {
                    let node = Element::node3(first.clone(), second.clone(), third.clone());
                    Self::deep(
                        deep.prefix.clone(),
                        deep.middle.push_back(node),
                        Affix::two(fourth.clone(), element),
                    )
                }
                Digit::One(_) | Digit::Two(..) | Digit::Three(..) => {
                    match deep.suffix.append(element) {
                        Ok(suffix) => Self::deep(deep.prefix.clone(), deep.middle.clone(), suffix),
                        Err(error) => unreachable!("{error} below capacity"),
                    }
                }
            },
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    /// Splits off the leftmost element.
    ///
    /// The element is borrowed from `self`; the remaining tree shares every
    /// subtree it does not rebuild.
    pub(crate) fn view_front(&self) -> Option<(&Element<T>, Self)> {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some((element, Self::Empty)),
            Self::Deep(deep) => {
                let (first, rest) = deep.prefix.view_first();
                let tree = match rest {
                    Some(prefix) => Self::deep(prefix, deep.middle.clone(), deep.suffix.clone()),
                    None => Self::refill_prefix(&deep.middle, &deep.suffix),
                };
                Some((first, tree))
            }
        }
    }

    /// Splits off the rightmost element.
    pub(crate) fn view_back(&self) -> Option<(Self, &Element<T>)> {
        match self {
            Self::Empty => None,
            Self::Single(element) => Some((Self::Empty, element)),
            Self::Deep(deep) => {
                let (rest, last) = deep.suffix.view_last();
                let tree = match rest {
                    Some(suffix) => Self::deep(deep.prefix.clone(), deep.middle.clone(), suffix),
                    None => Self::refill_suffix(&deep.prefix, &deep.middle),
                };
                Some((tree, last))
            }
        }
    }

    /// Rebuilds a tree whose prefix has run out, borrowing the interior's
    /// first node as the new prefix.
    fn refill_prefix(middle: &Self, suffix: &Affix<T>) -> Self {
        match middle.view_front() {
            Some((node, rest)) => Self::deep(Affix::from_node(node.as_node()), rest, suffix.clone()),
            None => Self::from_affix(suffix),
        }
    }

    fn refill_suffix(prefix: &Affix<T>, middle: &Self) -> Self {
        match middle.view_back() {
            Some((rest, node)) => Self::deep(prefix.clone(), rest, Affix::from_node(node.as_node())),
            None => Self::from_affix(prefix),
        }
    }

    /// A deep tree whose prefix may be empty.
    pub(crate) fn deep_with_prefix(prefix: &[Element<T>], middle: &Self, suffix: &Affix<T>) -> Self {
        Affix::from_slice(prefix).map_or_else(
            || Self::refill_prefix(middle, suffix),
            |prefix| Self::deep(prefix, middle.clone(), suffix.clone()),
        )
    }

    /// A deep tree whose suffix may be empty.
    pub(crate) fn deep_with_suffix(prefix: &Affix<T>, middle: &Self, suffix: &[Element<T>]) -> Self {
        Affix::from_slice(suffix).map_or_else(
            || Self::refill_suffix(prefix, middle),
            |suffix| Self::deep(prefix.clone(), middle.clone(), suffix),
        )
    }

    // =========================================================================
    // Concatenation
    // =========================================================================

    /// Joins `left`, the elements of `joint`, and `right`, in that order.
    pub(crate) fn concatenate(left: &Self, joint: Joint<T>, right: &Self) -> Self {
        match (left, right) {
            (Self::Empty, _) => joint
                .into_iter()
                .rev()
                .fold(right.clone(), |tree, element| tree.push_front(element)),
            (_, Self::Empty) => joint
                .into_iter()
                .fold(left.clone(), |tree, element| tree.push_back(element)),
            (Self::Single(element), _) => {
                Self::concatenate(&Self::Empty, joint, right).push_front(element.clone())
            }
            (_, Self::Single(element)) => {
                Self::concatenate(left, joint, &Self::Empty).push_back(element.clone())
            }
            (Self::Deep(left), Self::Deep(right)) => {
                let mut flat: Joint<T> = left.suffix.to_sequence().into_iter().collect();
                flat.extend(joint);
                flat.extend(right.prefix.to_sequence());
                let middle = Self::concatenate(&left.middle, regroup(&flat), &right.middle);
                Self::deep(left.prefix.clone(), middle, right.suffix.clone())
            }
        }
    }
}

/// Packs at least two elements into nodes of two or three.
///
/// Groups of three are taken from the front while more than four remain;
/// the tail of two, three or four becomes one or two final nodes.
pub(crate) fn regroup<T: Measured>(elements: &[Element<T>]) -> Joint<T> {
    let mut nodes = Joint::new();
    let mut rest = elements;
    while rest.len() > CAPACITY {
        let (group, tail) = rest.split_at(3);
        nodes.push(Element::node3(
            group[0].clone(),
            group[1].clone(),
            group[2].clone(),
        ));
        rest = tail;
    }
    match rest {
        [first, second] => nodes.push(Element::node2(first.clone(), second.clone())),
        [first, second, third] => {
            nodes.push(Element::node3(first.clone(), second.clone(), third.clone()));
        }
        [first, second, third, fourth] => {
            nodes.push(Element::node2(first.clone(), second.clone()));
            nodes.push(Element::node2(third.clone(), fourth.clone()));
        }
        _ => unreachable!("regrouping needs at least two elements"),
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::finger_tree::test_support::{Letter, leaves};
    use rstest::rstest;

    fn build(text: &str) -> Tree<Letter> {
        text.chars()
            .fold(Tree::Empty, |tree, letter| tree.push_back(Element::leaf(Letter(letter))))
    }

    fn drain_front(tree: &Tree<Letter>) -> String {
        let mut letters = String::new();
        let mut current = tree.clone();
        loop {
            let Some((element, rest)) = current.view_front() else {
                break;
            };
            letters.push(element.as_leaf().0);
            current = rest;
        }
        letters
    }

    fn drain_back(tree: &Tree<Letter>) -> String {
        let mut letters = String::new();
        let mut current = tree.clone();
        loop {
            let Some((rest, element)) = current.view_back() else {
                break;
            };
            letters.insert(0, element.as_leaf().0);
            current = rest;
        }
        letters
    }

    fn depth(tree: &Tree<Letter>) -> usize {
        match tree {
            Tree::Empty | Tree::Single(_) => 0,
            Tree::Deep(deep) => 1 + depth(&deep.middle),
        }
    }

    #[rstest]
    fn push_front_on_single_makes_deep() {
        let tree = build("b").push_front(Element::leaf(Letter('a')));
        assert!(matches!(tree, Tree::Deep(_)));
        assert_eq!(tree.measure(), "ab");
    }

    #[rstest]
    fn full_prefix_spills_three_elements_into_interior() {
        let tree = "abcdef"
            .chars()
            .rev()
            .fold(Tree::Empty, |tree, letter| {
                tree.push_front(Element::leaf(Letter(letter)))
            });
        // b c d e fill the prefix, a finds it full
        let Tree::Deep(deep) = &tree else {
            panic!("expected a deep tree")
        };
        assert_eq!(deep.prefix.len(), 2);
        assert!(matches!(deep.middle, Tree::Single(_)));
        assert_eq!(deep.middle.measure(), "cde");
        assert_eq!(drain_front(&tree), "abcdef");
    }

    #[rstest]
    fn full_suffix_spills_three_elements_into_interior() {
        let tree = build("abcdef");
        let Tree::Deep(deep) = &tree else {
            panic!("expected a deep tree")
        };
        assert_eq!(deep.suffix.len(), 2);
        assert_eq!(deep.middle.measure(), "bcd");
        assert_eq!(tree.measure(), "abcdef");
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("ab")]
    #[case("abcdefghij")]
    #[case("abcdefghijklmnopqrstuvwxyz")]
    fn views_drain_in_order(#[case] text: &str) {
        let tree = build(text);
        assert_eq!(drain_front(&tree), text);
        assert_eq!(drain_back(&tree), text);
    }

    #[rstest]
    fn view_front_on_empty_is_none() {
        assert!(Tree::<Letter>::Empty.view_front().is_none());
        assert!(Tree::<Letter>::Empty.view_back().is_none());
    }

    #[rstest]
    fn view_front_borrows_from_interior_when_prefix_is_single() {
        let tree = build("abcdefg");
        let (first, rest) = tree.view_front().unwrap();
        assert_eq!(first.as_leaf().0, 'a');
        let (second, rest) = rest.view_front().unwrap();
        assert_eq!(second.as_leaf().0, 'b');
        assert_eq!(rest.measure(), "cdefg");
    }

    #[rstest]
    #[case(2, &[2])]
    #[case(3, &[3])]
    #[case(4, &[2, 2])]
    #[case(5, &[3, 2])]
    #[case(6, &[3, 3])]
    #[case(7, &[3, 2, 2])]
    #[case(12, &[3, 3, 3, 3])]
    fn regroup_uses_twos_and_threes(#[case] count: usize, #[case] sizes: &[usize]) {
        let elements: Vec<Element<Letter>> = ('a'..='z')
            .take(count)
            .map(|letter| Element::leaf(Letter(letter)))
            .collect();
        let nodes = regroup(&elements);
        let actual: Vec<usize> = nodes.iter().map(|node| node.as_node().len()).collect();
        assert_eq!(actual, sizes);
        let measure: String = nodes.iter().map(Element::measure).collect();
        let expected: String = ('a'..='z').take(count).collect();
        assert_eq!(measure, expected);
    }

    #[rstest]
    #[case("", "", "")]
    #[case("", "xy", "")]
    #[case("a", "", "")]
    #[case("", "", "b")]
    #[case("a", "x", "b")]
    #[case("abcdefgh", "", "ijklmnop")]
    #[case("abcdefghijklmnopq", "xyz", "rstuvw")]
    fn concatenate_keeps_order_and_measure(
        #[case] left: &str,
        #[case] joint: &str,
        #[case] right: &str,
    ) {
        let joint: Joint<Letter> = joint
            .chars()
            .map(|letter| Element::leaf(Letter(letter)))
            .collect();
        let middle: String = joint.iter().map(|element| element.as_leaf().0).collect();
        let tree = Tree::concatenate(&build(left), joint, &build(right));
        let expected = format!("{left}{middle}{right}");
        assert_eq!(drain_front(&tree), expected);
        assert_eq!(tree.measure(), expected);
    }

    #[rstest]
    fn large_tree_stays_shallow() {
        let text: String = (0..2000).map(|index| char::from(b'a' + (index % 26) as u8)).collect();
        let tree = build(&text);
        assert!(depth(&tree) <= 12, "depth {}", depth(&tree));
        assert_eq!(tree.measure(), text);
    }

    #[rstest]
    fn from_slice_spreads_elements() {
        let elements: Vec<Element<Letter>> = leaves(['a', 'b', 'c', 'd', 'e', 'f']).into();
        for count in 0..=elements.len() {
            let tree = Tree::from_slice(&elements[..count]);
            let expected: String = "abcdef"[..count].to_string();
            assert_eq!(drain_front(&tree), expected);
        }
    }
}
