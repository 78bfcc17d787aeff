//! The `TimeOfDay` value type.
//!
//! A `TimeOfDay` is an hour/minute/second triple that can stand for a wall
//! clock reading or an elapsed duration; the hour is therefore not capped at
//! 23. Minutes and seconds are always in `0..60`, which is checked once by
//! the validated constructors. Every operation afterwards returns a new
//! value.
//!
//! Addition is overloaded on the right-hand operand: adding another
//! `TimeOfDay` adds its total seconds, adding a `u64` adds that many
//! seconds, and `u64 + TimeOfDay` gives the same answer as the reverse.
//!
//! # Examples
//!
//! ```rust
//! use timekeep::time::TimeOfDay;
//!
//! let start = TimeOfDay::new(9, 45, 0)?;
//! assert_eq!(start.to_string(), "09:45:00");
//! assert_eq!(start + 1337, TimeOfDay::new(10, 7, 17)?);
//! assert_eq!(1337 + start, start + 1337);
//!
//! let total: TimeOfDay = [
//!     TimeOfDay::new(1, 7, 2)?,
//!     TimeOfDay::new(1, 5, 8)?,
//!     TimeOfDay::new(1, 5, 0)?,
//! ]
//! .into_iter()
//! .sum();
//! assert_eq!(total, TimeOfDay::new(3, 17, 10)?);
//! # Ok::<(), timekeep::time::TimeOfDayError>(())
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use super::builder::TimeOfDayBuilder;
use super::error::TimeOfDayError;

const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// A validated hour/minute/second value.
///
/// Field order drives the derived ordering, so comparisons are lexicographic
/// over `(hour, minute, second)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u64,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// `00:00:00`, the value every omitted field defaults to.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a new `TimeOfDay`.
    ///
    /// # Errors
    ///
    /// - [`TimeOfDayError::MinuteOutOfRange`] if `minute >= 60`
    /// - [`TimeOfDayError::SecondOutOfRange`] if `second >= 60`
    /// - [`TimeOfDayError::HourOutOfRange`] if the total number of seconds
    ///   would not fit in a `u64`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::time::{TimeOfDay, TimeOfDayError};
    ///
    /// assert_eq!(TimeOfDay::new(9, 45, 0)?.to_string(), "09:45:00");
    /// assert_eq!(TimeOfDay::new(9, 0, 60), Err(TimeOfDayError::SecondOutOfRange(60)));
    /// # Ok::<(), TimeOfDayError>(())
    /// ```
    #[allow(clippy::cast_lossless)]
    pub const fn new(hour: u64, minute: u8, second: u8) -> Result<Self, TimeOfDayError> {
        if minute >= 60 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        if second >= 60 {
            return Err(TimeOfDayError::SecondOutOfRange(second));
        }
        let remainder = minute as u64 * SECONDS_PER_MINUTE + second as u64;
        match hour.checked_mul(SECONDS_PER_HOUR) {
            Some(hour_seconds) if hour_seconds.checked_add(remainder).is_some() => Ok(Self {
                hour,
                minute,
                second,
            }),
            _ => Err(TimeOfDayError::HourOutOfRange(hour)),
        }
    }

    /// Creates `hour:00:00`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeOfDayError::HourOutOfRange`] if the hour overflows the
    /// total second count.
    pub const fn from_hours(hour: u64) -> Result<Self, TimeOfDayError> {
        Self::new(hour, 0, 0)
    }

    /// Creates `hour:minute:00`.
    ///
    /// # Errors
    ///
    /// Same as [`TimeOfDay::new`] with a zero second.
    pub const fn from_hours_minutes(hour: u64, minute: u8) -> Result<Self, TimeOfDayError> {
        Self::new(hour, minute, 0)
    }

    /// Starts a two-phase construction where unset fields default to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::time::TimeOfDay;
    ///
    /// let time = TimeOfDay::builder().hour(11).minute(59).build()?;
    /// assert_eq!(time.to_string(), "11:59:00");
    /// # Ok::<(), timekeep::time::TimeOfDayError>(())
    /// ```
    #[must_use]
    pub const fn builder() -> TimeOfDayBuilder {
        TimeOfDayBuilder::new()
    }

    /// Decomposes a second count into hours, minutes and seconds.
    ///
    /// Never fails: the remainders are always below 60 and the total is
    /// representable by construction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::time::TimeOfDay;
    ///
    /// assert_eq!(TimeOfDay::from_total_seconds(36437).to_string(), "10:07:17");
    /// assert_eq!(TimeOfDay::from_total_seconds(360_000).to_string(), "100:00:00");
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_total_seconds(seconds: u64) -> Self {
        let minutes = seconds / SECONDS_PER_MINUTE;
        let second = seconds % SECONDS_PER_MINUTE;
        let hour = minutes / MINUTES_PER_HOUR;
        let minute = minutes % MINUTES_PER_HOUR;
        Self {
            hour,
            minute: minute as u8,
            second: second as u8,
        }
    }

    /// Returns `hour * 3600 + minute * 60 + second`.
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn total_seconds(&self) -> u64 {
        self.hour * SECONDS_PER_HOUR
            + self.minute as u64 * SECONDS_PER_MINUTE
            + self.second as u64
    }

    /// The hour component. May exceed 23.
    #[must_use]
    pub const fn hour(&self) -> u64 {
        self.hour
    }

    /// The minute component, in `0..60`.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// The second component, in `0..60`.
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns `true` if `self` is strictly later than `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use timekeep::time::TimeOfDay;
    ///
    /// let ten = TimeOfDay::new(10, 0, 0)?;
    /// let almost_ten = TimeOfDay::new(9, 59, 59)?;
    /// assert!(ten.is_after(&almost_ten));
    /// assert!(!ten.is_after(&ten));
    /// # Ok::<(), timekeep::time::TimeOfDayError>(())
    /// ```
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        (self.hour, self.minute, self.second) > (other.hour, other.minute, other.second)
    }

    /// Adds `seconds`, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add_seconds(self, seconds: u64) -> Option<Self> {
        match self.total_seconds().checked_add(seconds) {
            Some(total) => Some(Self::from_total_seconds(total)),
            None => None,
        }
    }

    /// Adds another time's total seconds, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        self.checked_add_seconds(other.total_seconds())
    }

    /// Returns a new value `seconds` later. Equivalent to `self + seconds`.
    ///
    /// # Panics
    ///
    /// Panics if the result overflows the total second count.
    #[must_use]
    pub fn increment(self, seconds: u64) -> Self {
        self + seconds
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{:02}:{:02}:{:02}",
            self.hour, self.minute, self.second
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_digits<T: FromStr>(field: &str, exact_width: Option<usize>) -> Option<T> {
    let width_matches = exact_width.map_or(!field.is_empty(), |width| field.len() == width);
    if !width_matches || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    /// Parses `H:MM:SS`, accepting any number of hour digits and exactly two
    /// minute and second digits.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeOfDayError::Parse(input.to_string());
        let mut fields = input.split(':');
        let (Some(hour), Some(minute), Some(second), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(malformed());
        };

        let hour = parse_digits::<u64>(hour, None).ok_or_else(malformed)?;
        let minute = parse_digits::<u8>(minute, Some(2)).ok_or_else(malformed)?;
        let second = parse_digits::<u8>(second, Some(2)).ok_or_else(malformed)?;

        Self::new(hour, minute, second)
    }
}

// =============================================================================
// Addition
// =============================================================================

impl Add for TimeOfDay {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the sum overflows the total second count.
    fn add(self, other: Self) -> Self {
        self.checked_add(other)
            .expect("overflow when adding TimeOfDay values")
    }
}

impl Add<u64> for TimeOfDay {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the sum overflows the total second count.
    fn add(self, seconds: u64) -> Self {
        self.checked_add_seconds(seconds)
            .expect("overflow when adding seconds to a TimeOfDay")
    }
}

impl Add<TimeOfDay> for u64 {
    type Output = TimeOfDay;

    fn add(self, time: TimeOfDay) -> TimeOfDay {
        time + self
    }
}

impl Add<&TimeOfDay> for &TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, other: &TimeOfDay) -> TimeOfDay {
        *self + *other
    }
}

impl Add<u64> for &TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, seconds: u64) -> TimeOfDay {
        *self + seconds
    }
}

impl AddAssign for TimeOfDay {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<u64> for TimeOfDay {
    fn add_assign(&mut self, seconds: u64) {
        *self = *self + seconds;
    }
}

impl Sum for TimeOfDay {
    fn sum<I: Iterator<Item = Self>>(iterator: I) -> Self {
        iterator.fold(Self::MIDNIGHT, |accumulator, time| accumulator + time)
    }
}

impl<'a> Sum<&'a TimeOfDay> for TimeOfDay {
    fn sum<I: Iterator<Item = &'a Self>>(iterator: I) -> Self {
        iterator.fold(Self::MIDNIGHT, |accumulator, time| accumulator + *time)
    }
}

// =============================================================================
// Algebra
// =============================================================================

#[cfg(feature = "algebra")]
impl crate::algebra::Semigroup for TimeOfDay {
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

#[cfg(feature = "algebra")]
impl crate::algebra::Monoid for TimeOfDay {
    fn empty() -> Self {
        Self::MIDNIGHT
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
struct TimeOfDayVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for TimeOfDayVisitor {
    type Value = TimeOfDay;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a time formatted as H:MM:SS")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
