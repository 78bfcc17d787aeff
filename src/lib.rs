//! # timekeep
//!
//! Small value types with validated construction and overloaded operators,
//! together with the algebraic vocabulary used to fold them.
//!
//! ## Overview
//!
//! - **Time**: [`TimeOfDay`](time::TimeOfDay), an hour/minute/second value with
//!   checked construction, `HH:MM:SS` formatting, ordering and addition
//!   against other times or plain seconds
//! - **Geometry**: [`Point`](geometry::Point), a 2D point with constructors and `+`
//! - **Kangaroo**: [`Kangaroo`](kangaroo::Kangaroo), a value that owns other values
//! - **Algebra**: `Semigroup` and `Monoid` traits for combining values
//!
//! ## Feature Flags
//!
//! - `algebra`: `Semigroup` / `Monoid` traits and instances (default)
//! - `serde`: `Serialize` / `Deserialize` for `TimeOfDay` and `Point`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use timekeep::prelude::*;
//!
//! let start = TimeOfDay::new(9, 45, 0)?;
//! let finish = start + 1337;
//!
//! assert_eq!(finish, 1337 + start);
//! assert_eq!(finish.to_string(), "10:07:17");
//! assert!(finish.is_after(&start));
//! # Ok::<(), TimeOfDayError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use timekeep::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    pub use crate::geometry::*;
    pub use crate::kangaroo::*;
    pub use crate::time::*;
}

#[cfg(feature = "algebra")]
pub mod algebra;

pub mod geometry;
pub mod kangaroo;
pub mod time;

static_assertions::assert_impl_all!(time::TimeOfDay: Copy, Send, Sync, Ord);
static_assertions::assert_impl_all!(geometry::Point: Copy, Send, Sync);
static_assertions::assert_impl_all!(time::TimeOfDayError: std::error::Error, Send, Sync);
