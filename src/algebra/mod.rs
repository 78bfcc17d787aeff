//! Algebraic structures for combining values.
//!
//! - [`Semigroup`]: Types with an associative binary operation (`combine`)
//! - [`Monoid`]: Semigroups with an identity element (`empty`)
//!
//! Instances are provided for `String` and `u64` here, and next to their
//! types for [`TimeOfDay`](crate::time::TimeOfDay) and
//! [`Point`](crate::geometry::Point).
//!
//! # Examples
//!
//! ```rust
//! use timekeep::algebra::{Monoid, Semigroup};
//!
//! assert_eq!(String::from("09:").combine(String::from("45")), "09:45");
//! assert_eq!(u64::combine_all(vec![3600, 1337]), 4937);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
