//! Points in the plane.

mod point;

pub use point::Point;
