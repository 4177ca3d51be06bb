//! Translation operators.
//!
//! `value + v` and `v + value` both return a shifted copy built from the
//! in-place `translate`. For `Rectangles`, the owned form reuses the
//! collection's buffer and the borrowed form clones it.

use std::ops::{Add, AddAssign, Neg, Sub};

use crate::position::Position;
use crate::rectangle::Rectangle;
use crate::rectangles::Rectangles;
use crate::vector::Vector;

impl AddAssign<Vector> for Position {
    #[inline]
    fn add_assign(&mut self, v: Vector) {
        self.translate(v);
    }
}

impl Add<Vector> for Position {
    type Output = Position;
    #[inline]
    fn add(self, v: Vector) -> Position {
        self.translated(v)
    }
}

impl Add<Position> for Vector {
    type Output = Position;
    #[inline]
    fn add(self, p: Position) -> Position {
        p + self
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for Position {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Position) -> Vector {
        Vector::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, v: Vector) {
        self.translate(v);
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, v: Vector) -> Vector {
        self.translated(v)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x(), -self.y())
    }
}

impl AddAssign<Vector> for Rectangle {
    #[inline]
    fn add_assign(&mut self, v: Vector) {
        self.translate(v);
    }
}

impl Add<Vector> for Rectangle {
    type Output = Rectangle;
    #[inline]
    fn add(self, v: Vector) -> Rectangle {
        self.translated(v)
    }
}

impl Add<Rectangle> for Vector {
    type Output = Rectangle;
    #[inline]
    fn add(self, r: Rectangle) -> Rectangle {
        r + self
    }
}

impl AddAssign<Vector> for Rectangles {
    fn add_assign(&mut self, v: Vector) {
        self.translate(v);
    }
}

impl Add<Vector> for Rectangles {
    type Output = Rectangles;
    fn add(mut self, v: Vector) -> Rectangles {
        self.translate(v);
        self
    }
}

impl Add<Vector> for &Rectangles {
    type Output = Rectangles;
    fn add(self, v: Vector) -> Rectangles {
        self.clone() + v
    }
}

impl Add<Rectangles> for Vector {
    type Output = Rectangles;
    fn add(self, rects: Rectangles) -> Rectangles {
        rects + self
    }
}

impl Add<&Rectangles> for Vector {
    type Output = Rectangles;
    fn add(self, rects: &Rectangles) -> Rectangles {
        rects + self
    }
}
