//! Numeric wrapper types for different algebraic operations.
//!
//! These newtypes let the same underlying type carry different `Semigroup`
//! and `Monoid` instances, which is how a single element type picks its
//! finger tree annotation.
//!
//! # Available Wrappers
//!
//! - [`Sum`]: Addition-based monoid (identity: 0). The count annotation.
//! - [`Max`]: Maximum-based semigroup (identity: type minimum, see [`Bounded`]).
//!   Wrapped in `Option` it is the priority annotation.

// =============================================================================
// Sum Wrapper
// =============================================================================

/// A newtype wrapper that represents the additive monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`; the identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use fingertree::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Max Wrapper
// =============================================================================

/// A newtype wrapper that represents the maximum semigroup.
///
/// `Max(a).combine(Max(b))` equals `Max(max(a, b))`. With [`Bounded`] the
/// identity is `Max(A::MIN_VALUE)`.
///
/// # Examples
///
/// ```rust
/// use fingertree::typeclass::{Max, Monoid, Semigroup};
///
/// assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
/// assert_eq!(Max::<i32>::empty(), Max::new(i32::MIN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

impl<A> Max<A> {
    /// Creates a new `Max` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Max` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Max<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// A trait for types with a minimum and a maximum value.
///
/// `Max<A>` uses `A::MIN_VALUE` as its identity: any value combined with the
/// minimum gives that value back.
///
/// # Implementing Bounded
///
/// ```rust
/// use fingertree::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// struct Score(u8);
///
/// impl Bounded for Score {
///     const MIN_VALUE: Self = Score(0);
///     const MAX_VALUE: Self = Score(100);
/// }
///
/// assert_eq!(Score::MIN_VALUE.0, 0);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);
