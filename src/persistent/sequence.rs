//! Persistent random-access sequence.
//!
//! A [`FingerTree`] measured by element count. Indexed access, insertion and
//! removal split the tree where the running count passes the index.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::finger_tree::{FingerTree, Iter};
use crate::typeclass::{Measured, Monoid, Semigroup, Sum};

/// A value counted as one element.
struct Indexed<T>(T);

impl<T> Measured for Indexed<T> {
    type Measure = Sum<usize>;

    #[inline]
    fn measure(&self) -> Sum<usize> {
        Sum::new(1)
    }
}

/// A persistent (immutable) sequence with indexed access.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`       | O(1)       |
/// | `singleton` | O(1)       |
/// | `push_front` | O(1) amortized |
/// | `push_back`  | O(1) amortized |
/// | `pop_front`  | O(1) amortized |
/// | `pop_back`   | O(1) amortized |
/// | `front`     | O(1)       |
/// | `back`      | O(1)       |
/// | `len`       | O(1)       |
/// | `get`       | O(log n)   |
/// | `insert`    | O(log n)   |
/// | `remove`    | O(log n)   |
/// | `split_at`  | O(log n)   |
/// | `concat`    | O(log(min(n, m))) |
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::PersistentSequence;
///
/// let sequence: PersistentSequence<char> = "abcdefghij".chars().collect();
/// assert_eq!(sequence.get(5), Some(&'f'));
///
/// let inserted = sequence.insert(5, 'X').unwrap();
/// assert_eq!(inserted.get(5), Some(&'X'));
/// assert_eq!(inserted.get(6), Some(&'f'));
/// assert_eq!(sequence.len(), 10); // Original unchanged
/// ```
pub struct PersistentSequence<T> {
    tree: FingerTree<Indexed<T>>,
}

impl<T> Clone for PersistentSequence<T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T> PersistentSequence<T> {
    /// Creates a new empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: FingerTree::new(),
        }
    }

    /// Creates a sequence containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            tree: FingerTree::singleton(Indexed(element)),
        }
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of elements in the sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.measure().into_inner()
    }

    /// Returns a reference to the first element, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.tree.front().map(|indexed| &indexed.0)
    }

    /// Returns a reference to the last element, if any.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tree.back().map(|indexed| &indexed.0)
    }

    /// Prepends an element to the front of the sequence.
    #[must_use]
    pub fn push_front(&self, element: T) -> Self {
        Self {
            tree: self.tree.push_front(Indexed(element)),
        }
    }

    /// Appends an element to the back of the sequence.
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        Self {
            tree: self.tree.push_back(Indexed(element)),
        }
    }

    /// Removes and returns the first element.
    #[must_use]
    pub fn pop_front(&self) -> Option<(Self, T)>
    where
        T: Clone,
    {
        self.tree
            .view_front()
            .map(|(indexed, tree)| (Self { tree }, indexed.0.clone()))
    }

    /// Removes and returns the last element.
    #[must_use]
    pub fn pop_back(&self) -> Option<(Self, T)>
    where
        T: Clone,
    {
        self.tree
            .view_back()
            .map(|(tree, indexed)| (Self { tree }, indexed.0.clone()))
    }

    /// Returns the element at the given index, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.tree
            .split(|count| count.0 > index, Sum::new(0))
            .ok()
            .map(|split| &split.element.0)
    }

    /// Inserts an element so that it ends up at `index`.
    ///
    /// `index == len()` appends. Returns `None` if `index > len()`.
    #[must_use]
    pub fn insert(&self, index: usize, element: T) -> Option<Self> {
        if index > self.len() {
            return None;
        }
        let (left, right) = self.split_tree_at(index);
        Some(Self {
            tree: FingerTree::concatenate(&left, [Indexed(element)], &right),
        })
    }

    /// Removes the element at `index` and returns it with the remaining
    /// sequence. Returns `None` if `index >= len()`.
    #[must_use]
    pub fn remove(&self, index: usize) -> Option<(Self, T)>
    where
        T: Clone,
    {
        let split = self
            .tree
            .split(|count| count.0 > index, Sum::new(0))
            .ok()?;
        Some((
            Self {
                tree: split.left.append(&split.right),
            },
            split.element.0.clone(),
        ))
    }

    /// Splits into the first `index` elements and the rest.
    ///
    /// An `index` past the end puts every element on the left.
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let (left, right) = self.split_tree_at(index);
        (Self { tree: left }, Self { tree: right })
    }

    fn split_tree_at(&self, index: usize) -> (FingerTree<Indexed<T>>, FingerTree<Indexed<T>>) {
        self.tree.split_off(|count| count.0 > index)
    }

    /// Concatenates this sequence with another sequence.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            tree: self.tree.append(&other.tree),
        }
    }

    /// Creates an iterator over references to the elements.
    #[must_use]
    pub fn iter(&self) -> PersistentSequenceIterator<'_, T> {
        PersistentSequenceIterator {
            front: self.tree.iter(),
            back: self.tree.iter_rev(),
            remaining: self.len(),
        }
    }
}

impl<T> Default for PersistentSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Semigroup for PersistentSequence<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T> Monoid for PersistentSequence<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for PersistentSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for PersistentSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> FromIterator<T> for PersistentSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().map(Indexed).collect(),
        }
    }
}

impl<T: Clone> IntoIterator for PersistentSequence<T> {
    type Item = T;
    type IntoIter = PersistentSequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentSequenceIntoIterator { sequence: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentSequence<T> {
    type Item = &'a T;
    type IntoIter = PersistentSequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A double-ended iterator over references to the elements of a
/// [`PersistentSequence`].
pub struct PersistentSequenceIterator<'a, T> {
    front: Iter<'a, Indexed<T>>,
    back: Iter<'a, Indexed<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentSequenceIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.front.next().map(|indexed| &indexed.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for PersistentSequenceIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.back.next().map(|indexed| &indexed.0)
    }
}

impl<T> ExactSizeIterator for PersistentSequenceIterator<'_, T> {}

/// An owning iterator over the elements of a [`PersistentSequence`].
pub struct PersistentSequenceIntoIterator<T> {
    sequence: PersistentSequence<T>,
}

impl<T: Clone> Iterator for PersistentSequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (new_sequence, element) = self.sequence.pop_front()?;
        self.sequence = new_sequence;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len(), Some(self.sequence.len()))
    }
}

impl<T: Clone> DoubleEndedIterator for PersistentSequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (new_sequence, element) = self.sequence.pop_back()?;
        self.sequence = new_sequence;
        Some(element)
    }
}

impl<T: Clone> ExactSizeIterator for PersistentSequenceIntoIterator<T> {}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for PersistentSequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}
