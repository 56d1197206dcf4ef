//! Integer points and exact squared distances.

use std::fmt;
use std::ops::{Add, Sub};

/// Squared Euclidean distance. Wide enough for `2 * (2^32)^2`.
pub type DistSq = u128;

/// A point with integer coordinates. Plain value, equality by coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Exact squared distance; never overflows for any pair of `i32` points.
    #[inline]
    pub fn dist_sq(self, other: Point) -> DistSq {
        axis_sq(self.x, other.x) + axis_sq(self.y, other.y)
    }

    #[inline]
    pub fn dist(self, other: Point) -> f64 {
        (self.dist_sq(other) as f64).sqrt()
    }

    /// Shift by `(dx, dy)`; `None` if a coordinate leaves the `i32` range.
    #[inline]
    pub fn translate(self, dx: i32, dy: i32) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

/// Squared difference of two coordinates along one axis.
#[inline]
pub(crate) fn axis_sq(a: i32, b: i32) -> DistSq {
    let d = (a as i64 - b as i64).unsigned_abs() as DistSq;
    d * d
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Overflow behaves as for plain `i32`; use `translate` near the range limits.
impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
