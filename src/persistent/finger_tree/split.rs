//! Predicate-driven search over the cached measures.
//!
//! The descent only ever looks at cached measures of whole buffers and
//! subtrees, and scans at most four elements per level, so locating the
//! boundary costs O(log n) combines.

use arrayvec::ArrayVec;

use super::affix::CAPACITY;
use super::node::Element;
use super::tree::Tree;
use crate::typeclass::{Measured, Semigroup};

/// A tree cut around one element: `(left, element, right)`.
pub(crate) type Parts<'a, T> = (Tree<T>, &'a Element<T>, Tree<T>);

type Group<T> = ArrayVec<Element<T>, CAPACITY>;

impl<T: Measured> Tree<T> {
    /// Locates the element at which `predicate` first holds for
    /// `start · measure(left) · measure(element)`.
    ///
    /// Callers guarantee that the predicate does not hold at `start` and
    /// holds at `start · measure(self)`; under that guarantee the result is
    /// `None` only for the empty tree.
    pub(crate) fn split_tree<'a, F>(&'a self, predicate: &F, start: &T::Measure) -> Option<Parts<'a, T>>
    where
        F: Fn(&T::Measure) -> bool,
    {
        let deep = match self {
            Self::Empty => return None,
            Self::Single(element) => return Some((Self::Empty, element, Self::Empty)),
            Self::Deep(deep) => deep,
        };

        let after_prefix = start.clone().combine(deep.prefix.measure().clone());
        if predicate(&after_prefix) {
            let (before, element, after) = split_group(&deep.prefix.elements(), predicate, start);
            return Some((
                Self::from_slice(&before),
                element,
                Self::deep_with_prefix(&after, &deep.middle, &deep.suffix),
            ));
        }

        let after_middle = after_prefix.clone().combine(deep.middle.measure());
        if predicate(&after_middle) {
            let (middle_left, node, middle_right) = deep.middle.split_tree(predicate, &after_prefix)?;
            let node_start = after_prefix.combine(middle_left.measure());
            let (before, element, after) =
                split_group(&node.as_node().elements(), predicate, &node_start);
            return Some((
                Self::deep_with_suffix(&deep.prefix, &middle_left, &before),
                element,
                Self::deep_with_prefix(&after, &middle_right, &deep.suffix),
            ));
        }

        let (before, element, after) = split_group(&deep.suffix.elements(), predicate, &after_middle);
        Some((
            Self::deep_with_suffix(&deep.prefix, &deep.middle, &before),
            element,
            Self::from_slice(&after),
        ))
    }
}

/// Scans a buffer or node whose measure crosses the boundary.
///
/// Picks the first element at which the running measure satisfies the
/// predicate, or the last element when it never does.
fn split_group<'a, T, F>(
    elements: &[&'a Element<T>],
    predicate: &F,
    start: &T::Measure,
) -> (Group<T>, &'a Element<T>, Group<T>)
where
    T: Measured,
    F: Fn(&T::Measure) -> bool,
{
    let mut running = start.clone();
    let last = elements.len().saturating_sub(1);
    let position = elements
        .iter()
        .position(|element| {
            running = running.clone().combine(element.measure());
            predicate(&running)
        })
        .unwrap_or(last);
    let before = elements[..position].iter().map(|element| (*element).clone()).collect();
    let after = elements[position + 1..]
        .iter()
        .map(|element| (*element).clone())
        .collect();
    (before, elements[position], after)
}
