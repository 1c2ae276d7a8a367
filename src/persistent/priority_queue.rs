//! Persistent max-priority queue.
//!
//! A [`FingerTree`] in insertion order whose measure tracks the element
//! count and the largest priority. The maximum is found by splitting where
//! the running maximum first reaches the total maximum, which selects the
//! earliest pushed of several equal maxima.

use std::fmt;

use tracing::trace;

use super::finger_tree::{FingerTree, Iter, Split};
use crate::typeclass::{Max, Measured, Monoid, Sum};

type PriorityMeasure<P> = (Sum<usize>, Option<Max<P>>);

struct Prioritized<T, P> {
    value: T,
    priority: P,
}

impl<T, P: Ord + Clone> Measured for Prioritized<T, P> {
    type Measure = PriorityMeasure<P>;

    fn measure(&self) -> Self::Measure {
        (Sum::new(1), Some(Max::new(self.priority.clone())))
    }
}

/// A persistent (immutable) priority queue returning the largest priority
/// first.
///
/// Values with equal priorities come out in the order they were pushed.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `push`    | O(1) amortized |
/// | `len`     | O(1)       |
/// | `peek`    | O(log n)   |
/// | `pop`     | O(log n)   |
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::PriorityQueue;
///
/// let queue = PriorityQueue::new()
///     .push("x", 3)
///     .push("y", 5)
///     .push("z", 1);
/// assert_eq!(queue.peek(), Some((&"y", &5)));
///
/// let (value, priority, rest) = queue.pop().unwrap();
/// assert_eq!((value, priority), ("y", 5));
/// assert_eq!(rest.peek(), Some((&"x", &3)));
/// assert_eq!(queue.len(), 3); // Original unchanged
/// ```
pub struct PriorityQueue<T, P: Ord + Clone> {
    tree: FingerTree<Prioritized<T, P>>,
}

impl<T, P: Ord + Clone> Clone for PriorityQueue<T, P> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T, P: Ord + Clone> PriorityQueue<T, P> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: FingerTree::new(),
        }
    }

    /// Returns `true` if the queue holds no values.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of values in the queue.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.measure().0.into_inner()
    }

    /// Returns a new queue with `value` added at `priority`.
    #[must_use]
    pub fn push(&self, value: T, priority: P) -> Self {
        Self {
            tree: self.tree.push_back(Prioritized { value, priority }),
        }
    }

    fn find_max(&self) -> Option<Split<'_, Prioritized<T, P>>> {
        let (_, total) = self.tree.measure();
        self.tree
            .split(|(_, running)| *running == total, PriorityMeasure::empty())
            .ok()
    }

    /// Returns the value with the largest priority, and that priority.
    #[must_use]
    pub fn peek(&self) -> Option<(&T, &P)> {
        let split = self.find_max()?;
        Some((&split.element.value, &split.element.priority))
    }

    /// Removes the value with the largest priority.
    ///
    /// Returns the value, its priority and the remaining queue, or `None`
    /// if the queue is empty.
    #[must_use]
    pub fn pop(&self) -> Option<(T, P, Self)>
    where
        T: Clone,
    {
        if self.is_empty() {
            trace!("pop on an empty priority queue");
            return None;
        }
        let split = self.find_max()?;
        let rest = Self {
            tree: FingerTree::concatenate(&split.left, [], &split.right),
        };
        Some((
            split.element.value.clone(),
            split.element.priority.clone(),
            rest,
        ))
    }

    /// Returns an iterator over values and priorities in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&T, &P)> + '_ {
        let forward = self.tree.iter();
        let remaining = self.len();
        let backward = self.tree.iter_rev();
        QueueIter {
            forward,
            backward,
            remaining,
        }
        .map(|prioritized| (&prioritized.value, &prioritized.priority))
    }
}

struct QueueIter<'a, T, P: Ord + Clone> {
    forward: Iter<'a, Prioritized<T, P>>,
    backward: Iter<'a, Prioritized<T, P>>,
    remaining: usize,
}

impl<'a, T, P: Ord + Clone> Iterator for QueueIter<'a, T, P> {
    type Item = &'a Prioritized<T, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        self.forward.next()
    }
}

impl<T, P: Ord + Clone> DoubleEndedIterator for QueueIter<'_, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;
        self.backward.next()
    }
}

impl<T, P: Ord + Clone> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: Ord + Clone + fmt::Debug> fmt::Debug for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P: Ord + Clone> FromIterator<(T, P)> for PriorityQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self {
            tree: iter
                .into_iter()
                .map(|(value, priority)| Prioritized { value, priority })
                .collect(),
        }
    }
}
