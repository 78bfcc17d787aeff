//! Error types for constructing and parsing [`TimeOfDay`](super::TimeOfDay) values.

/// Errors that can occur when building a `TimeOfDay`.
///
/// The range variants are the invalid-argument family: they are produced
/// by every validated constructor before a value exists. `Parse` is only
/// produced by [`FromStr`](std::str::FromStr) when the text itself is malformed.
///
/// # Examples
///
/// ```rust
/// use timekeep::time::{TimeOfDay, TimeOfDayError};
///
/// let error = TimeOfDay::new(9, 60, 0).unwrap_err();
/// assert_eq!(error, TimeOfDayError::MinuteOutOfRange(60));
/// assert!(error.is_invalid_argument());
/// assert_eq!(error.to_string(), "minute must be in 0..60, got 60");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeOfDayError {
    /// The minute was 60 or more.
    MinuteOutOfRange(u8),
    /// The second was 60 or more.
    SecondOutOfRange(u8),
    /// The hour is so large that the total second count no longer fits in a `u64`.
    HourOutOfRange(u64),
    /// The text was not of the form `H:MM:SS`.
    Parse(String),
}

impl TimeOfDayError {
    /// Returns `true` for the range errors raised by validated construction.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::MinuteOutOfRange(_) | Self::SecondOutOfRange(_) | Self::HourOutOfRange(_)
        )
    }
}

impl std::fmt::Display for TimeOfDayError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MinuteOutOfRange(minute) => {
                write!(formatter, "minute must be in 0..60, got {minute}")
            }
            Self::SecondOutOfRange(second) => {
                write!(formatter, "second must be in 0..60, got {second}")
            }
            Self::HourOutOfRange(hour) => {
                write!(formatter, "hour {hour} overflows the total second count")
            }
            Self::Parse(input) => {
                write!(formatter, "expected H:MM:SS, got {input:?}")
            }
        }
    }
}

impl std::error::Error for TimeOfDayError {}
