//! Edge buffers ("affixes") holding one to four elements.
//!
//! The prefix and suffix of a deep tree are affixes. [`Digit`] cannot
//! represent zero elements, so every buffer handed out by these functions is
//! non-empty by construction; operations that could leave nothing behind
//! return `Option` instead.

use arrayvec::ArrayVec;

use super::error::FingerTreeError;
use super::node::{Element, Node};
use crate::typeclass::{Measured, Semigroup};

/// Maximum number of elements an affix holds.
pub(crate) const CAPACITY: usize = 4;

pub(crate) enum Digit<T: Measured> {
    One(Element<T>),
    Two(Element<T>, Element<T>),
    Three(Element<T>, Element<T>, Element<T>),
    Four(Element<T>, Element<T>, Element<T>, Element<T>),
}

impl<T: Measured> Clone for Digit<T> {
    fn clone(&self) -> Self {
        match self {
            Self::One(first) => Self::One(first.clone()),
            Self::Two(first, second) => Self::Two(first.clone(), second.clone()),
            Self::Three(first, second, third) => {
                Self::Three(first.clone(), second.clone(), third.clone())
            }
            Self::Four(first, second, third, fourth) => {
                Self::Four(first.clone(), second.clone(), third.clone(), fourth.clone())
            }
        }
    }
}

/// A digit together with the combined measure of its elements.
pub(crate) struct Affix<T: Measured> {
    measure: T::Measure,
    digit: Digit<T>,
}

impl<T: Measured> Clone for Affix<T> {
    fn clone(&self) -> Self {
        Self {
            measure: self.measure.clone(),
            digit: self.digit.clone(),
        }
    }
}

impl<T: Measured> Affix<T> {
    fn new(digit: Digit<T>) -> Self {
        let measure = match &digit {
            Digit::One(first) => first.measure(),
            Digit::Two(first, second) => first.measure().combine(second.measure()),
            Digit::Three(first, second, third) => first
                .measure()
                .combine(second.measure())
                .combine(third.measure()),
            Digit::Four(first, second, third, fourth) => first
                .measure()
                .combine(second.measure())
                .combine(third.measure())
                .combine(fourth.measure()),
        };
        Self { measure, digit }
    }

    pub(crate) fn one(first: Element<T>) -> Self {
        Self {
            measure: first.measure(),
            digit: Digit::One(first),
        }
    }

    pub(crate) fn two(first: Element<T>, second: Element<T>) -> Self {
        Self::new(Digit::Two(first, second))
    }

    /// Builds the affix holding the children of a branch node, reusing the
    /// node's cached measure.
    pub(crate) fn from_node(node: &Node<T>) -> Self {
        let digit = match node {
            Node::Node2 { first, second, .. } => Digit::Two(first.clone(), second.clone()),
            Node::Node3 {
                first,
                second,
                third,
                ..
            } => Digit::Three(first.clone(), second.clone(), third.clone()),
        };
        Self {
            measure: node.measure().clone(),
            digit,
        }
    }

    /// Returns `None` for an empty slice or one longer than [`CAPACITY`].
    pub(crate) fn from_slice(elements: &[Element<T>]) -> Option<Self> {
        let digit = match elements {
            [first] => Digit::One(first.clone()),
            [first, second] => Digit::Two(first.clone(), second.clone()),
            [first, second, third] => Digit::Three(first.clone(), second.clone(), third.clone()),
            [first, second, third, fourth] => Digit::Four(
                first.clone(),
                second.clone(),
                third.clone(),
                fourth.clone(),
            ),
            _ => return None,
        };
        Some(Self::new(digit))
    }

    pub(crate) const fn digit(&self) -> &Digit<T> {
        &self.digit
    }

    pub(crate) const fn measure(&self) -> &T::Measure {
        &self.measure
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        match self.digit {
            Digit::One(_) => 1,
            Digit::Two(..) => 2,
            Digit::Three(..) => 3,
            Digit::Four(..) => 4,
        }
    }

    pub(crate) const fn head(&self) -> &Element<T> {
        match &self.digit {
            Digit::One(first)
            | Digit::Two(first, _)
            | Digit::Three(first, _, _)
            | Digit::Four(first, _, _, _) => first,
        }
    }

    pub(crate) const fn last(&self) -> &Element<T> {
        match &self.digit {
            Digit::One(first) => first,
            Digit::Two(_, second) => second,
            Digit::Three(_, _, third) => third,
            Digit::Four(_, _, _, fourth) => fourth,
        }
    }

    pub(crate) fn prepend(&self, element: Element<T>) -> Result<Self, FingerTreeError> {
        let measure = element.measure().combine(self.measure.clone());
        let digit = match &self.digit {
            Digit::One(first) => Digit::Two(element, first.clone()),
            Digit::Two(first, second) => Digit::Three(element, first.clone(), second.clone()),
            Digit::Three(first, second, third) => {
                Digit::Four(element, first.clone(), second.clone(), third.clone())
            }
            Digit::Four(..) => return Err(FingerTreeError::Overflow { capacity: CAPACITY }),
        };
        Ok(Self { measure, digit })
    }

    pub(crate) fn append(&self, element: Element<T>) -> Result<Self, FingerTreeError> {
        let measure = self.measure.clone().combine(element.measure());
        let digit = match &self.digit {
            Digit::One(first) => Digit::Two(first.clone(), element),
            Digit::Two(first, second) => Digit::Three(first.clone(), second.clone(), element),
            Digit::Three(first, second, third) => {
                Digit::Four(first.clone(), second.clone(), third.clone(), element)
            }
            Digit::Four(..) => return Err(FingerTreeError::Overflow { capacity: CAPACITY }),
        };
        Ok(Self { measure, digit })
    }

    /// Splits off the first element; the rest is `None` for a one-element affix.
    pub(crate) fn view_first(&self) -> (&Element<T>, Option<Self>) {
        match &self.digit {
            Digit::One(first) => (first, None),
            Digit::Two(first, second) => (first, Some(Self::one(second.clone()))),
            Digit::Three(first, second, third) => {
                (first, Some(Self::two(second.clone(), third.clone())))
            }
            Digit::Four(first, second, third, fourth) => (
                first,
                Some(Self::new(Digit::Three(
                    second.clone(),
                    third.clone(),
                    fourth.clone(),
                ))),
            ),
        }
    }

    /// Splits off the last element; the rest is `None` for a one-element affix.
    pub(crate) fn view_last(&self) -> (Option<Self>, &Element<T>) {
        match &self.digit {
            Digit::One(first) => (None, first),
            Digit::Two(first, second) => (Some(Self::one(first.clone())), second),
            Digit::Three(first, second, third) => {
                (Some(Self::two(first.clone(), second.clone())), third)
            }
            Digit::Four(first, second, third, fourth) => (
                Some(Self::new(Digit::Three(
                    first.clone(),
                    second.clone(),
                    third.clone(),
                ))),
                fourth,
            ),
        }
    }

    /// Borrows the elements in order.
    pub(crate) fn elements(&self) -> ArrayVec<&Element<T>, CAPACITY> {
        let mut elements = ArrayVec::new();
        match &self.digit {
            Digit::One(first) => elements.push(first),
            Digit::Two(first, second) => {
                elements.push(first);
                elements.push(second);
            }
            Digit::Three(first, second, third) => {
                elements.push(first);
                elements.push(second);
                elements.push(third);
            }
            Digit::Four(first, second, third, fourth) => {
                elements.push(first);
                elements.push(second);
                elements.push(third);
                elements.push(fourth);
            }
        }
        elements
    }

    pub(crate) fn to_sequence(&self) -> ArrayVec<Element<T>, CAPACITY> {
        self.elements().into_iter().cloned().collect()
    }
}
