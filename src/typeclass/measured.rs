//! Measured type class - values that summarize themselves as a monoid.
//!
//! A finger tree is parameterized by its element type alone; the element type
//! chooses the annotation through [`Measured::Measure`]. Choosing `Sum<usize>`
//! and measuring every element as one yields positional indexing; choosing
//! `Option<Max<P>>` yields priority search.
//!
//! # Examples
//!
//! ```rust
//! use fingertree::typeclass::{Measured, Sum};
//!
//! struct Word(&'static str);
//!
//! impl Measured for Word {
//!     type Measure = Sum<usize>;
//!
//!     fn measure(&self) -> Sum<usize> {
//!         Sum::new(self.0.len())
//!     }
//! }
//!
//! assert_eq!(Word("finger").measure(), Sum::new(6));
//! ```

use super::monoid::Monoid;

/// A type class for values carrying a monoidal annotation.
///
/// `measure` must be pure: two calls on the same value return equal results.
/// Trees cache the combined measures of their buffers and subtrees, so a
/// value whose measure changed after insertion would corrupt every cache
/// above it.
pub trait Measured {
    /// The annotation type.
    type Measure: Monoid + Clone;

    /// Returns the annotation of this value.
    fn measure(&self) -> Self::Measure;
}
