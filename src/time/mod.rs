//! Time-of-day values.
//!
//! - [`TimeOfDay`]: validated hour/minute/second with `HH:MM:SS` formatting,
//!   ordering and overloaded addition
//! - [`TimeOfDayBuilder`]: two-phase construction with zero defaults
//! - [`TimeOfDayError`]: construction and parse failures
//!
//! # Examples
//!
//! ```rust
//! use timekeep::time::{TimeOfDay, TimeOfDayError};
//!
//! let start: TimeOfDay = "09:45:00".parse()?;
//! let total_seconds = start.total_seconds();
//! assert_eq!(TimeOfDay::from_total_seconds(total_seconds), start);
//!
//! assert!(TimeOfDay::new(9, 60, 0).unwrap_err().is_invalid_argument());
//! # Ok::<(), TimeOfDayError>(())
//! ```

mod builder;
mod error;
mod time_of_day;

pub use builder::TimeOfDayBuilder;
pub use error::TimeOfDayError;
pub use time_of_day::TimeOfDay;
