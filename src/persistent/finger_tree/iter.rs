//! Lazy in-order traversal.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::Element;
use super::tree::Tree;
use crate::typeclass::Measured;

/// Pending work fits inline for trees of a few million elements.
const STACK_CAPACITY: usize = 32;

enum Frame<'a, T: Measured> {
    Tree(&'a Tree<T>),
    Element(&'a Element<T>),
}

impl<T: Measured> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Measured> Copy for Frame<'_, T> {}

/// An iterator over the values of a [`FingerTree`](super::FingerTree).
///
/// Created by [`FingerTree::iter`](super::FingerTree::iter) (front to back)
/// and [`FingerTree::iter_rev`](super::FingerTree::iter_rev) (back to
/// front). Subtrees are expanded only when the traversal reaches them, so
/// taking the first few values of a large tree is cheap.
pub struct Iter<'a, T: Measured> {
    stack: SmallVec<[Frame<'a, T>; STACK_CAPACITY]>,
    reversed: bool,
}

impl<'a, T: Measured> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, reversed: bool) -> Self {
        let mut stack = SmallVec::new();
        stack.push(Frame::Tree(tree));
        Self { stack, reversed }
    }

    /// Pushes `elements` (given in sequence order) so that the one visited
    /// first ends up on top of the stack.
    fn schedule<I>(&mut self, elements: I)
    where
        I: DoubleEndedIterator<Item = &'a Element<T>>,
    {
        if self.reversed {
            self.stack.extend(elements.map(Frame::Element));
        } else {
            self.stack.extend(elements.rev().map(Frame::Element));
        }
    }
}

impl<T: Measured> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            reversed: self.reversed,
        }
    }
}

impl<'a, T: Measured> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Element(Element::Leaf(value)) => return Some(value.as_ref()),
                Frame::Element(Element::Node(node)) => self.schedule(node.elements().into_iter()),
                Frame::Tree(Tree::Empty) => {}
                Frame::Tree(Tree::Single(element)) => self.stack.push(Frame::Element(element)),
                Frame::Tree(Tree::Deep(deep)) => {
                    let (last, first) = if self.reversed {
                        (&deep.prefix, &deep.suffix)
                    } else {
                        (&deep.suffix, &deep.prefix)
                    };
                    // The side visited last goes to the bottom.
                    self.schedule(last.elements().into_iter());
                    self.stack.push(Frame::Tree(&deep.middle));
                    self.schedule(first.elements().into_iter());
                }
            }
        }
        None
    }
}

impl<T: Measured> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistent::finger_tree::test_support::Letter;
    use rstest::rstest;

    fn build(text: &str) -> Tree<Letter> {
        text.chars()
            .fold(Tree::Empty, |tree, letter| tree.push_back(Element::leaf(Letter(letter))))
    }

    fn collect(iter: Iter<'_, Letter>) -> String {
        iter.map(|letter| letter.0).collect()
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("abcde")]
    #[case("abcdefghijklmnopqrstuvwxyz")]
    fn forward_and_reverse_visit_the_same_values(#[case] text: &str) {
        let tree = build(text);
        assert_eq!(collect(Iter::new(&tree, false)), text);
        let reversed: String = text.chars().rev().collect();
        assert_eq!(collect(Iter::new(&tree, true)), reversed);
    }

    #[rstest]
    fn iteration_is_restartable() {
        let tree = build("abcdefghij");
        let mut iter = Iter::new(&tree, false);
        assert_eq!(iter.next().map(|letter| letter.0), Some('a'));
        let resumed = iter.clone();
        assert_eq!(collect(iter), "bcdefghij");
        assert_eq!(collect(resumed), "bcdefghij");
        assert_eq!(collect(Iter::new(&tree, false)), "abcdefghij");
    }

    #[rstest]
    fn exhausted_iterator_stays_exhausted() {
        let tree = build("ab");
        let mut iter = Iter::new(&tree, false);
        assert!(iter.by_ref().count() == 2);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
