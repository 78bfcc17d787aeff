//! Monoid - semigroups with an identity element.
//!
//! A type `T` is a monoid if it has an associative `combine` (from
//! [`Semigroup`]) and an identity element `empty` such that combining with
//! it on either side changes nothing. Midnight is the identity for adding
//! times, which is what lets an empty timesheet total to `00:00:00`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use timekeep::algebra::{Monoid, Semigroup};
/// use timekeep::time::TimeOfDay;
///
/// let laps = vec![
///     TimeOfDay::new(1, 7, 2)?,
///     TimeOfDay::new(1, 5, 8)?,
///     TimeOfDay::new(1, 5, 0)?,
/// ];
/// assert_eq!(TimeOfDay::combine_all(laps), TimeOfDay::new(3, 17, 10)?);
/// assert_eq!(TimeOfDay::combine_all(Vec::new()), TimeOfDay::empty());
/// # Ok::<(), timekeep::time::TimeOfDayError>(())
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
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
    /// use timekeep::algebra::Monoid;
    ///
    /// assert!(String::empty().is_empty_value());
    /// assert!(!String::from("09:45:00").is_empty_value());
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

impl Monoid for u64 {
    fn empty() -> Self {
        0
    }
}
