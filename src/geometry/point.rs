//! A 2D point with overloaded addition.
//!
//! `Point + Point` adds coordinates component-wise. A bare `(f64, f64)`
//! tuple on either side is treated as an offset, so the operator picks its
//! behavior from the operand types rather than from a runtime check.
//!
//! # Examples
//!
//! ```rust
//! use timekeep::geometry::Point;
//!
//! let corner = Point::new(3.0, 4.0);
//! assert_eq!(corner.to_string(), "(3.0, 4.0)");
//! assert_eq!(corner + Point::new(1.0, 1.0), Point::new(4.0, 5.0));
//! assert_eq!(corner + (0.5, -4.0), Point::new(3.5, 0.0));
//! assert!((corner.distance(&Point::origin()) - 5.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

/// A point with `f64` coordinates. Both default to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from both coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `(0.0, 0.0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({:?}, {:?})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<(f64, f64)> for Point {
    type Output = Self;

    fn add(self, (dx, dy): (f64, f64)) -> Self {
        self + Self::new(dx, dy)
    }
}

impl Add<Point> for (f64, f64) {
    type Output = Point;

    fn add(self, point: Point) -> Point {
        point + self
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(feature = "algebra")]
impl crate::algebra::Semigroup for Point {
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

#[cfg(feature = "algebra")]
impl crate::algebra::Monoid for Point {
    fn empty() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::origin());
    }

    #[rstest]
    #[case(Point::new(3.0, 4.0), "(3.0, 4.0)")]
    #[case(Point::new(-1.5, 0.25), "(-1.5, 0.25)")]
    fn display(#[case] point: Point, #[case] expected: &str) {
        assert_eq!(point.to_string(), expected);
    }

    #[rstest]
    fn tuple_offset_is_commutative() {
        let point = Point::new(1.0, 2.0);
        assert_eq!(point + (3.0, 4.0), (3.0, 4.0) + point);
        assert_eq!(point + (3.0, 4.0), Point::new(4.0, 6.0));
    }

    #[rstest]
    fn add_assign_accumulates() {
        let mut point = Point::origin();
        point += Point::new(1.0, 1.0);
        point += Point::from((2.0, -1.0));
        assert_eq!(point, Point::new(3.0, 0.0));
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance(&b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance(&a) - 5.0).abs() < f64::EPSILON);
    }
}
