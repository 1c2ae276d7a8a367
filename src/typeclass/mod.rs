//! Type class traits for annotating persistent sequences.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Measured`]: Values that summarize themselves as a monoid
//!
//! ## Foundation Types
//!
//! - [`Sum`]: Additive wrapper, the count annotation
//! - [`Max`]: Maximum wrapper, the priority annotation when wrapped in `Option`
//! - [`Bounded`]: Trait for types with minimum and maximum values
//!
//! # Examples
//!
//! ```rust
//! use fingertree::typeclass::{Measured, Monoid, Semigroup, Sum};
//!
//! struct Item;
//!
//! impl Measured for Item {
//!     type Measure = Sum<usize>;
//!
//!     fn measure(&self) -> Sum<usize> {
//!         Sum::new(1)
//!     }
//! }
//!
//! let count = Sum::combine_all([Item, Item, Item].iter().map(Measured::measure));
//! assert_eq!(count, Sum::new(3));
//! assert_eq!(Sum::empty().combine(count), count);
//! ```

mod measured;
mod monoid;
mod semigroup;
mod wrappers;

pub use measured::Measured;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Sum};
