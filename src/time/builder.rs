//! Two-phase construction of a [`TimeOfDay`].

use super::error::TimeOfDayError;
use super::time_of_day::TimeOfDay;

/// Collects the fields of a [`TimeOfDay`] before validating them.
///
/// Unset fields are zero. Validation happens once, in [`build`](Self::build),
/// with the same rules as [`TimeOfDay::new`].
///
/// # Examples
///
/// ```rust
/// use timekeep::time::{TimeOfDay, TimeOfDayBuilder, TimeOfDayError};
///
/// let lunch = TimeOfDayBuilder::new().hour(12).minute(30).build()?;
/// assert_eq!(lunch, TimeOfDay::new(12, 30, 0)?);
///
/// let invalid = TimeOfDay::builder().second(61).build();
/// assert_eq!(invalid, Err(TimeOfDayError::SecondOutOfRange(61)));
/// # Ok::<(), TimeOfDayError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDayBuilder {
    hour: u64,
    minute: u8,
    second: u8,
}

impl TimeOfDayBuilder {
    /// Creates a builder with every field at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Sets the hour.
    #[must_use]
    pub const fn hour(mut self, hour: u64) -> Self {
        self.hour = hour;
        self
    }

    /// Sets the minute.
    #[must_use]
    pub const fn minute(mut self, minute: u8) -> Self {
        self.minute = minute;
        self
    }

    /// Sets the second.
    #[must_use]
    pub const fn second(mut self, second: u8) -> Self {
        self.second = second;
        self
    }

    /// Validates the collected fields.
    ///
    /// # Errors
    ///
    /// Same as [`TimeOfDay::new`].
    pub const fn build(self) -> Result<TimeOfDay, TimeOfDayError> {
        TimeOfDay::new(self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_builder_is_midnight() {
        assert_eq!(TimeOfDayBuilder::new().build(), Ok(TimeOfDay::MIDNIGHT));
    }

    #[rstest]
    fn later_setter_wins() {
        let time = TimeOfDayBuilder::new().minute(5).minute(10).build();
        assert_eq!(time, TimeOfDay::new(0, 10, 0));
    }

    #[rstest]
    fn minute_checked_before_second() {
        let time = TimeOfDayBuilder::new().minute(60).second(60).build();
        assert_eq!(time, Err(TimeOfDayError::MinuteOutOfRange(60)));
    }
}
