//! Error types for finger tree operations.

use thiserror::Error;

/// Errors reported by finger tree operations.
///
/// # Examples
///
/// ```rust
/// use fingertree::persistent::FingerTreeError;
///
/// let error = FingerTreeError::NotFound;
/// assert_eq!(
///     error.to_string(),
///     "no element boundary satisfies the predicate"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FingerTreeError {
    /// An edge buffer was asked to grow past its capacity.
    ///
    /// Tree operations redistribute full buffers into the interior before
    /// this can happen, so seeing it from a tree operation is a bug.
    #[error("edge buffer already holds {capacity} elements")]
    Overflow {
        /// The buffer capacity.
        capacity: usize,
    },

    /// No element boundary satisfies the predicate.
    ///
    /// Returned for empty trees, for predicates that already hold at the
    /// starting annotation, and for predicates that never hold over the
    /// whole tree.
    #[error("no element boundary satisfies the predicate")]
    NotFound,
}
