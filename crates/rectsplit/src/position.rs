//! Absolute locations in the integer plane.

use std::fmt;

use nalgebra::Point2;

use crate::vector::Vector;

/// A point `(x, y)`. Displacements are `Vector`s, not `Position`s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// `(0, 0)`; the default corner of a rectangle.
    pub const ORIGIN: Position = Position::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self::ORIGIN
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Mirror across the line x = y.
    #[inline]
    pub const fn reflection(&self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Shift in place by `v`.
    #[inline]
    pub fn translate(&mut self, v: Vector) -> &mut Self {
        self.x += v.x();
        self.y += v.y();
        self
    }

    /// Shifted copy; `self` is untouched.
    #[inline]
    pub fn translated(mut self, v: Vector) -> Self {
        self.translate(v);
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point2<i32>> for Position {
    #[inline]
    fn from(p: Point2<i32>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Position> for Point2<i32> {
    #[inline]
    fn from(p: Position) -> Self {
        Point2::new(p.x, p.y)
    }
}
