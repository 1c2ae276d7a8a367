//! Persistent (immutable) data structures built on finger trees.
//!
//! - [`FingerTree`]: Sequence annotated with a monoidal measure
//! - [`PersistentSequence`]: Random-access sequence (count measure)
//! - [`PriorityQueue`]: Max-priority queue (maximum-priority measure)
//!
//! # Structural Sharing
//!
//! All data structures in this module use structural sharing to ensure
//! that operations like prepending, appending, splitting or concatenating
//! create new versions without copying the entire structure.
//!
//! # Examples
//!
//! ## `PersistentSequence`
//!
//! ```rust
//! use fingertree::persistent::PersistentSequence;
//!
//! let sequence: PersistentSequence<i32> = (0..100).collect();
//! assert_eq!(sequence.get(50), Some(&50));
//!
//! // Structural sharing: the original sequence is preserved
//! let (rest, removed) = sequence.remove(50).unwrap();
//! assert_eq!(removed, 50);
//! assert_eq!(sequence.len(), 100); // Original unchanged
//! assert_eq!(rest.len(), 99);      // New version
//! ```
//!
//! ## `PriorityQueue`
//!
//! ```rust
//! use fingertree::persistent::PriorityQueue;
//!
//! let queue: PriorityQueue<&str, u8> =
//!     [("low", 1), ("high", 9), ("mid", 5)].into_iter().collect();
//! assert_eq!(queue.peek(), Some((&"high", &9)));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod finger_tree;
mod priority_queue;
mod sequence;

pub use finger_tree::FingerTree;
pub use finger_tree::FingerTreeError;
pub use finger_tree::Iter;
pub use finger_tree::Split;
pub use priority_queue::PriorityQueue;
pub use sequence::PersistentSequence;
pub use sequence::PersistentSequenceIntoIterator;
pub use sequence::PersistentSequenceIterator;

// Sequences share all nodes through `ReferenceCounter`, so these cover the
// tree internals as well.
#[cfg(feature = "arc")]
mod thread_safety {
    use super::{PersistentSequence, PriorityQueue};
    use static_assertions::assert_impl_all;

    assert_impl_all!(PersistentSequence<String>: Send, Sync);
    assert_impl_all!(PriorityQueue<String, u64>: Send, Sync);
}

// =============================================================================
// Tests
// =============================================================================
