//! Persistent finger trees annotated with a monoidal measure.
//!
//! A finger tree is a sequence with cheap access to both ends. Each end
//! keeps up to four elements in an edge buffer; everything in between lives
//! in an interior tree whose elements are branch nodes of two or three
//! elements, whose interior holds nodes of nodes, and so on. Every subtree
//! caches the [`Monoid`] combination of its elements' measures, which turns
//! a monotonic predicate over the running measure into an O(log n) search.
//!
//! Picking the measure picks the data structure:
//!
//! - an element count (`Sum<usize>`) gives indexed access, see
//!   [`PersistentSequence`](crate::persistent::PersistentSequence)
//! - the largest priority (`Option<Max<P>>`) gives a priority queue, see
//!   [`PriorityQueue`](crate::persistent::PriorityQueue)
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `new`, `singleton` | O(1) |
//! | `push_front`, `push_back` | O(1) amortized |
//! | `view_front`, `view_back` | O(1) amortized |
//! | `front`, `back`, `measure` | O(1) |
//! | `concatenate` | O(log(min(n, m))) |
//! | `split` | O(log n) |
//! | `iter`, `iter_rev` | O(1) per element amortized |

mod affix;
mod error;
mod iter;
mod node;
mod split;
mod tree;

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

pub use error::FingerTreeError;
pub use iter::Iter;

use node::Element;
use tree::{Joint, Tree};

use crate::typeclass::{Measured, Monoid, Semigroup};

/// A persistent sequence of measured values.
///
/// Every operation returns a new tree and leaves `self` untouched; the two
/// versions share all subtrees the operation did not rebuild. Cloning is
/// O(1).
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::FingerTree;
/// use fingertree::typeclass::{Measured, Sum};
///
/// #[derive(Debug, PartialEq)]
/// struct Item(char);
///
/// impl Measured for Item {
///     type Measure = Sum<usize>;
///
///     fn measure(&self) -> Sum<usize> {
///         Sum::new(1)
///     }
/// }
///
/// let tree: FingerTree<Item> = "abcdefghij".chars().map(Item).collect();
/// assert_eq!(tree.measure(), Sum::new(10));
///
/// let split = tree.split(|count| count.0 > 5, Sum::new(0)).unwrap();
/// assert_eq!(split.element, &Item('f'));
/// assert_eq!(split.left.measure(), Sum::new(5));
/// assert_eq!(split.right.measure(), Sum::new(4));
///
/// // The original is unchanged
/// assert_eq!(tree.front(), Some(&Item('a')));
/// ```
pub struct FingerTree<T: Measured> {
    root: Tree<T>,
}

/// The result of [`FingerTree::split`]: the values before the matched
/// value, the matched value itself, and the values after it.
pub struct Split<'a, T: Measured> {
    /// Values on which the predicate does not yet hold.
    pub left: FingerTree<T>,
    /// The value at which the predicate first holds.
    pub element: &'a T,
    /// Values after the matched one.
    pub right: FingerTree<T>,
}

impl<T: Measured> Clone for FingerTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T: Measured> FingerTree<T> {
    const fn from_root(root: Tree<T>) -> Self {
        Self { root }
    }

    /// Creates an empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::from_root(Tree::Empty)
    }

    /// Creates a tree holding one value.
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::from_root(Tree::Single(Element::leaf(value)))
    }

    /// Returns `true` if the tree holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the combined measure of all values, in order.
    ///
    /// The measure is cached, so this is O(1) apart from cloning it.
    #[inline]
    #[must_use]
    pub fn measure(&self) -> T::Measure {
        self.root.measure()
    }

    /// Returns a reference to the first value, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.root.front().map(Element::as_leaf)
    }

    /// Returns a reference to the last value, if any.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.root.back().map(Element::as_leaf)
    }

    /// Returns a new tree with `value` in front.
    #[must_use]
    pub fn push_front(&self, value: T) -> Self {
        Self::from_root(self.root.push_front(Element::leaf(value)))
    }

    /// Returns a new tree with `value` at the back.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        Self::from_root(self.root.push_back(Element::leaf(value)))
    }

    /// Returns the first value and the tree of the remaining values, or
    /// `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::persistent::FingerTree;
    /// use fingertree::typeclass::{Measured, Sum};
    ///
    /// struct Item(u8);
    ///
    /// impl Measured for Item {
    ///     type Measure = Sum<usize>;
    ///
    ///     fn measure(&self) -> Sum<usize> {
    ///         Sum::new(1)
    ///     }
    /// }
    ///
    /// let tree = FingerTree::new().push_back(Item(1)).push_back(Item(2));
    /// let (first, rest) = tree.view_front().unwrap();
    /// assert_eq!(first.0, 1);
    /// assert_eq!(rest.measure(), Sum::new(1));
    /// assert!(FingerTree::<Item>::new().view_front().is_none());
    /// ```
    #[must_use]
    pub fn view_front(&self) -> Option<(&T, Self)> {
        self.root
            .view_front()
            .map(|(element, rest)| (element.as_leaf(), Self::from_root(rest)))
    }

    /// Returns the tree of all values but the last, and the last value, or
    /// `None` if the tree is empty.
    #[must_use]
    pub fn view_back(&self) -> Option<(Self, &T)> {
        self.root
            .view_back()
            .map(|(rest, element)| (Self::from_root(rest), element.as_leaf()))
    }

    /// Joins `left`, the values of `middle`, and `right`, in that order.
    ///
    /// Runs in O(log(min(n, m))) plus the length of `middle`.
    #[must_use]
    pub fn concatenate<I>(left: &Self, middle: I, right: &Self) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let joint: Joint<T> = middle.into_iter().map(Element::leaf).collect();
        Self::from_root(Tree::concatenate(&left.root, joint, &right.root))
    }

    /// Returns the values of `self` followed by the values of `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        Self::from_root(Tree::concatenate(&self.root, Joint::new(), &other.root))
    }

    /// Finds the value at which a monotonic predicate over the running
    /// measure flips from `false` to `true`.
    ///
    /// Starting from `start`, measures are combined left to right. The match
    /// is the value `x` with `predicate(start · measure(left))` false and
    /// `predicate(start · measure(left) · measure(x))` true.
    ///
    /// # Errors
    ///
    /// Returns [`FingerTreeError::NotFound`] if the tree is empty, if the
    /// predicate already holds at `start`, or if it does not hold after
    /// combining the whole tree.
    pub fn split<F>(&self, predicate: F, start: T::Measure) -> Result<Split<'_, T>, FingerTreeError>
    where
        F: Fn(&T::Measure) -> bool,
    {
        if self.is_empty() || predicate(&start) || !predicate(&start.clone().combine(self.measure()))
        {
            trace!(empty = self.is_empty(), "split found no boundary");
            return Err(FingerTreeError::NotFound);
        }
        let (left, element, right) = self
            .root
            .split_tree(&predicate, &start)
            .ok_or(FingerTreeError::NotFound)?;
        Ok(Split {
            left: Self::from_root(left),
            element: element.as_leaf(),
            right: Self::from_root(right),
        })
    }

    /// Splits into the longest prefix on which `predicate` does not hold
    /// for the running measure, and the rest.
    ///
    /// Unlike [`split`](Self::split) this never fails: if the predicate
    /// holds for the empty measure the whole tree goes right, and if it
    /// never holds the whole tree goes left.
    #[must_use]
    pub fn split_off<F>(&self, predicate: F) -> (Self, Self)
    where
        F: Fn(&T::Measure) -> bool,
    {
        if self.is_empty() || !predicate(&self.measure()) {
            return (self.clone(), Self::new());
        }
        match self.root.split_tree(&predicate, &T::Measure::empty()) {
            Some((left, element, right)) => (
                Self::from_root(left),
                Self::from_root(right.push_front(element.clone())),
            ),
            None => (self.clone(), Self::new()),
        }
    }

    /// Returns an iterator over the values from front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, false)
    }

    /// Returns an iterator over the values from back to front.
    #[must_use]
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter::new(&self.root, true)
    }
}

impl<T: Measured> Default for FingerTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Measured> Semigroup for FingerTree<T> {
    fn combine(self, other: Self) -> Self {
        self.append(&other)
    }
}

impl<T: Measured> Monoid for FingerTree<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Measured + PartialEq> PartialEq for FingerTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Measured + Eq> Eq for FingerTree<T> {}

impl<T: Measured + Hash> Hash for FingerTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iter().count().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Measured + fmt::Debug> fmt::Debug for FingerTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Measured + fmt::Debug> fmt::Debug for Split<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Split")
            .field("left", &self.left)
            .field("element", self.element)
            .field("right", &self.right)
            .finish()
    }
}

impl<T: Measured> FromIterator<T> for FingerTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.push_back(value))
    }
}

impl<'a, T: Measured> IntoIterator for &'a FingerTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: Measured + serde::Serialize> serde::Serialize for FingerTree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct FingerTreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for FingerTreeVisitor<T>
where
    T: Measured + serde::Deserialize<'de>,
{
    type Value = FingerTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = FingerTree::new();
        while let Some(value) = seq.next_element()? {
            tree = tree.push_back(value);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for FingerTree<T>
where
    T: Measured + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FingerTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
