//! # fingertree
//!
//! Persistent finger trees annotated with a monoidal measure, and the
//! sequences built on top of them.
//!
//! ## Overview
//!
//! A finger tree is an immutable sequence with amortized O(1) access to both
//! ends, O(log n) concatenation, and an O(log n) search driven by a
//! predicate over the running measure of its elements. Choosing the measure
//! chooses the data structure:
//!
//! - **Type Classes**: `Semigroup`, `Monoid` and `Measured`, the contract a
//!   measure fulfils, plus the `Sum` and `Max` wrappers
//! - **Persistent Data Structures**: `FingerTree` itself, a random-access
//!   `PersistentSequence` and a max-`PriorityQueue`
//!
//! ## Feature Flags
//!
//! - `arc`: Share tree nodes through `Arc` so trees are `Send + Sync`
//! - `serde`: Serialize and deserialize trees and sequences as sequences
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fingertree::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Item(char);
//!
//! impl Measured for Item {
//!     type Measure = Sum<usize>;
//!
//!     fn measure(&self) -> Sum<usize> {
//!         Sum::new(1)
//!     }
//! }
//!
//! let left: FingerTree<Item> = "abc".chars().map(Item).collect();
//! let right: FingerTree<Item> = "fg".chars().map(Item).collect();
//! let joined = FingerTree::concatenate(&left, [Item('d'), Item('e')], &right);
//! assert_eq!(joined.measure(), Sum::new(7));
//!
//! let split = joined.split(|count| count.0 > 3, Sum::empty()).unwrap();
//! assert_eq!(split.element, &Item('d'));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fingertree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
    pub use crate::typeclass::*;
}

pub mod persistent;
pub mod typeclass;
