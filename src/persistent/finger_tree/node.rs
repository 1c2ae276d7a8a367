//! Elements and branch nodes of a finger tree.
//!
//! A finger tree of values keeps, in its interior, a finger tree of branch
//! nodes, whose interior is a finger tree of branch nodes of branch nodes, and
//! so on. Instead of nesting the element type one level deeper per level
//! (`FingerTree<Node<Node<T>>>`), every level stores the same tagged
//! [`Element`]: the outermost level holds only leaves, every interior level
//! holds only nodes.

use arrayvec::ArrayVec;

use crate::persistent::ReferenceCounter;
use crate::typeclass::{Measured, Semigroup};

/// A measured element at any depth of the tree.
pub(crate) enum Element<T: Measured> {
    /// A caller value.
    Leaf(ReferenceCounter<T>),
    /// A branch node of the interior.
    Node(ReferenceCounter<Node<T>>),
}

impl<T: Measured> Clone for Element<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf(value) => Self::Leaf(value.clone()),
            Self::Node(node) => Self::Node(node.clone()),
        }
    }
}

impl<T: Measured> Element<T> {
    pub(crate) fn leaf(value: T) -> Self {
        Self::Leaf(ReferenceCounter::new(value))
    }

    pub(crate) fn node2(first: Self, second: Self) -> Self {
        Self::Node(ReferenceCounter::new(Node::node2(first, second)))
    }

    pub(crate) fn node3(first: Self, second: Self, third: Self) -> Self {
        Self::Node(ReferenceCounter::new(Node::node3(first, second, third)))
    }

    /// Leaves are measured on demand, nodes return their cached measure.
    pub(crate) fn measure(&self) -> T::Measure {
        match self {
            Self::Leaf(value) => value.measure(),
            Self::Node(node) => node.measure().clone(),
        }
    }

    pub(crate) fn as_leaf(&self) -> &T {
        match self {
            Self::Leaf(value) => value,
            Self::Node(_) => unreachable!("only the outermost tree level holds values"),
        }
    }

    pub(crate) fn as_node(&self) -> &Node<T> {
        match self {
            Self::Node(node) => node,
            Self::Leaf(_) => unreachable!("interior tree levels hold only branch nodes"),
        }
    }
}

/// A group of two or three elements with their combined measure.
///
/// Built only by the tree's own rebalancing: when a full edge buffer spills
/// into the interior, and when concatenation regroups the elements between
/// two trees.
pub(crate) enum Node<T: Measured> {
    Node2 {
        measure: T::Measure,
        first: Element<T>,
        second: Element<T>,
    },
    Node3 {
        measure: T::Measure,
        first: Element<T>,
        second: Element<T>,
        third: Element<T>,
    },
}

impl<T: Measured> Node<T> {
    pub(crate) fn node2(first: Element<T>, second: Element<T>) -> Self {
        let measure = first.measure().combine(second.measure());
        Self::Node2 {
            measure,
            first,
            second,
        }
    }

    pub(crate) fn node3(first: Element<T>, second: Element<T>, third: Element<T>) -> Self {
        let measure = first
            .measure()
            .combine(second.measure())
            .combine(third.measure());
        Self::Node3 {
            measure,
            first,
            second,
            third,
        }
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        match self {
            Self::Node2 { .. } => 2,
            Self::Node3 { .. } => 3,
        }
    }

    pub(crate) const fn measure(&self) -> &T::Measure {
        match self {
            Self::Node2 { measure, .. } | Self::Node3 { measure, .. } => measure,
        }
    }

    /// Borrows the children in order.
    pub(crate) fn elements(&self) -> ArrayVec<&Element<T>, 3> {
        let mut elements = ArrayVec::new();
        match self {
            Self::Node2 { first, second, .. } => {
                elements.push(first);
                elements.push(second);
            }
            Self::Node3 {
                first,
                second,
                third,
                ..
            } => {
                elements.push(first);
                elements.push(second);
                elements.push(third);
            }
        }
        elements
    }
}
