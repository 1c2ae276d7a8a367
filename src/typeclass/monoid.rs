//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is the algebraic contract every finger tree annotation satisfies.
//! The identity is the measure of the empty tree; `combine` builds the measure
//! of a concatenation from the measures of its parts.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a                                  // left identity
//! a.combine(T::empty()) == a                                  // right identity
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))        // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fingertree::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! // Count annotation
//! assert_eq!(Sum::<usize>::empty(), Sum::new(0));
//!
//! // Priority annotation: `None` is negative infinity
//! let priority: Option<Max<i32>> = Monoid::empty();
//! assert_eq!(priority.combine(Some(Max::new(-7))), Some(Max::new(-7)));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use fingertree::typeclass::{Semigroup, Monoid};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum::new(1), Sum::new(2)]), Sum::new(3));
    /// assert_eq!(Sum::<u8>::combine_all(Vec::new()), Sum::new(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fingertree::typeclass::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("hello").is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

/// Option forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Sum forms a monoid under addition with 0 as the identity.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Max forms a monoid with the minimum bound as the identity.
impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Tuples form a monoid when all their elements are monoids.
impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_identity_is_zero() {
        assert_eq!(Sum::<usize>::empty(), Sum::new(0));
        assert_eq!(Sum::empty().combine(Sum::new(7)), Sum::new(7));
    }

    #[rstest]
    fn max_identity_is_minimum() {
        assert_eq!(Max::<i64>::empty(), Max::new(i64::MIN));
        assert_eq!(Max::new(-3).combine(Max::empty()), Max::new(-3));
    }

    #[rstest]
    fn option_identity_is_none() {
        let identity: Option<Max<i32>> = Monoid::empty();
        assert_eq!(identity, None);
        assert!(identity.is_empty_value());
    }

    #[rstest]
    fn tuple_identity_is_componentwise() {
        let identity: (Sum<usize>, Option<Max<u8>>) = Monoid::empty();
        assert_eq!(identity, (Sum::new(0), None));
    }

    #[rstest]
    fn combine_all_folds_in_order() {
        let parts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(String::combine_all(parts), "abc");
    }
}
