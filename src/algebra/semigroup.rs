//! Semigroup - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists a function
//! `combine: (T, T) -> T` that is associative. Adding two durations is the
//! motivating example in this crate: `(a + b) + c == a + (b + c)`.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use timekeep::algebra::Semigroup;
//! use timekeep::time::TimeOfDay;
//!
//! let morning = TimeOfDay::new(1, 7, 2)?;
//! let afternoon = TimeOfDay::new(1, 5, 8)?;
//! assert_eq!(morning.combine(afternoon), TimeOfDay::new(2, 12, 10)?);
//! # Ok::<(), timekeep::time::TimeOfDayError>(())
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::algebra::Semigroup;
    ///
    /// assert_eq!(40_u64.combine(2), 42);
    /// ```
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// `combine_n(x, 1)` returns `x`, `combine_n(x, 2)` returns `x.combine(x)`.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::algebra::Semigroup;
    /// use timekeep::time::TimeOfDay;
    ///
    /// let shift = TimeOfDay::new(7, 30, 0)?;
    /// assert_eq!(shift.combine_n(4), TimeOfDay::new(30, 0, 0)?);
    /// # Ok::<(), timekeep::time::TimeOfDayError>(())
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        if count == 1 {
            return self;
        }

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty. For a version that falls back
    /// to the identity element, see [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::algebra::Semigroup;
    ///
    /// assert_eq!(u64::reduce_all(vec![1, 2, 3]), Some(6));
    /// assert_eq!(u64::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Seconds Implementation
// =============================================================================

/// Plain second counts combine by addition.
impl Semigroup for u64 {
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn string_combine_concatenates() {
        let left = String::from("09:");
        let right = String::from("45");
        assert_eq!(left.combine(right), "09:45");
    }

    #[rstest]
    fn string_combine_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        let result = left.combine_ref(&right);
        assert_eq!(result, "Hello, World!");
        assert_eq!(left, "Hello, ");
        assert_eq!(right, "World!");
    }

    #[rstest]
    #[case(1, 60)]
    #[case(2, 120)]
    #[case(60, 3600)]
    fn seconds_combine_n(#[case] count: usize, #[case] expected: u64) {
        assert_eq!(60_u64.combine_n(count), expected);
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = 60_u64.combine_n(0);
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        let empty: Vec<String> = vec![];
        assert_eq!(String::reduce_all(empty), None);
    }

    #[rstest]
    fn reduce_all_folds_left_to_right() {
        let parts = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(String::reduce_all(parts), Some(String::from("abc")));
    }
}
