//! Displacements in the integer plane.

use std::fmt;

use nalgebra::Vector2;

/// A displacement `<x, y>`, added to positions, rectangles or other vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    x: i32,
    y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
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

    /// Component-wise `self += v`.
    #[inline]
    pub fn translate(&mut self, v: Vector) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    #[inline]
    pub fn translated(mut self, v: Vector) -> Self {
        self.translate(v);
        self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl From<Vector2<i32>> for Vector {
    #[inline]
    fn from(v: Vector2<i32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<i32> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}
