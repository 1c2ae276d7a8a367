//! Integration tests for thread-safe persistent data structures.
//!
//! These tests verify that trees, sequences and priority queues built with
//! the `arc` feature can be shared across threads, with every thread
//! deriving its own versions from a common original.

#![cfg(feature = "arc")]

use fingertree::persistent::{FingerTree, PersistentSequence, PriorityQueue};
use fingertree::typeclass::{Measured, Sum};
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Item(usize);

impl Measured for Item {
    type Measure = Sum<usize>;

    fn measure(&self) -> Sum<usize> {
        Sum::new(1)
    }
}

// =============================================================================
// FingerTree Integration Tests
// =============================================================================

#[rstest]
fn test_finger_tree_cross_thread_split() {
    let original: Arc<FingerTree<Item>> = Arc::new((0..1000).map(Item).collect());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let tree = Arc::clone(&original);
            thread::spawn(move || {
                let at = index * 250;
                let split = tree.split(|count| count.0 > at, Sum::new(0)).unwrap();
                assert_eq!(split.element, &Item(at));
                split.left.push_back(Item(usize::MAX))
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, tree) in results.iter().enumerate() {
        assert_eq!(tree.measure(), Sum::new(index * 250 + 1));
        assert_eq!(tree.back(), Some(&Item(usize::MAX)));
    }

    // Original should still be unchanged
    assert_eq!(original.measure(), Sum::new(1000));
}

// =============================================================================
// PersistentSequence Integration Tests
// =============================================================================

#[rstest]
fn test_sequence_cross_thread_structural_sharing() {
    let original: Arc<PersistentSequence<usize>> = Arc::new((0..100).collect());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let sequence = Arc::clone(&original);
            thread::spawn(move || {
                let inserted = sequence.insert(index, 1000 + index).unwrap();
                assert_eq!(inserted.get(index), Some(&(1000 + index)));
                assert_eq!(sequence.len(), 100);
                inserted
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let sequence = handle.join().expect("Thread panicked");
        assert_eq!(sequence.len(), 101);
        assert_eq!(sequence.get(index), Some(&(1000 + index)));
    }

    assert_eq!(original.len(), 100);
    assert_eq!(original.get(0), Some(&0));
}

// =============================================================================
// PriorityQueue Integration Tests
// =============================================================================

#[rstest]
fn test_priority_queue_moves_between_threads() {
    let queue: PriorityQueue<String, u32> = [("a", 1), ("b", 3), ("c", 2)]
        .into_iter()
        .map(|(value, priority)| (value.to_string(), priority))
        .collect();

    let handle = thread::spawn(move || {
        let (value, priority, rest) = queue.pop().unwrap();
        (value, priority, rest)
    });
    let (value, priority, rest) = handle.join().expect("Thread panicked");

    assert_eq!((value.as_str(), priority), ("b", 3));
    assert_eq!(rest.peek(), Some((&"c".to_string(), &2)));
}
