//! Axis-aligned rectangles and the split/merge algebra.
//!
//! Model
//! - A rectangle is `width x height` (both `>= 0`) anchored at its lower-left
//!   corner `pos`. Zero-sized rectangles are valid; they arise from cuts at 0
//!   or at the full extent.
//! - `split_horizontally(c)` cuts along `y = pos.y + c` into a lower and an
//!   upper part; `merge_horizontally` is its exact inverse.
//! - The vertical variants reflect, run the horizontal variant, and reflect
//!   back. Both axes therefore accept and reject exactly the same inputs.
//!
//! Cut ranges are checked before anything is built (`CutOutOfRange`); the
//! constructor check (`NegativeSize`) stays in place underneath it.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::position::Position;
use crate::vector::Vector;

/// Direction of a cut line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Cut along a horizontal line; parts stack bottom to top.
    Horizontal,
    /// Cut along a vertical line; parts sit left to right.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontally"),
            Axis::Vertical => f.write_str("vertically"),
        }
    }
}

/// Axis-aligned rectangle with non-negative integer size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: i32,
    height: i32,
    pos: Position,
}

impl Rectangle {
    /// Build a rectangle with lower-left corner `pos`.
    pub fn new(width: i32, height: i32, pos: Position) -> Result<Self> {
        if width < 0 || height < 0 {
            debug!(width, height, "rejected negative rectangle size");
            return Err(GeometryError::NegativeSize { width, height });
        }
        Ok(Self { width, height, pos })
    }

    /// Build a rectangle anchored at the origin.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Result<Self> {
        Self::new(width, height, Position::ORIGIN)
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Lower-left corner.
    #[inline]
    pub const fn pos(&self) -> Position {
        self.pos
    }

    /// `width * height`, computed in `i64` so it cannot overflow.
    pub fn area(&self) -> u64 {
        let area = i64::from(self.width) * i64::from(self.height);
        debug_assert!(area >= 0, "size invariant violated: {}", self);
        area as u64
    }

    /// Mirror across x = y: size swapped, corner reflected.
    #[inline]
    pub const fn reflection(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            pos: self.pos.reflection(),
        }
    }

    /// Move the corner in place; size is unchanged.
    #[inline]
    pub fn translate(&mut self, v: Vector) -> &mut Self {
        self.pos.translate(v);
        self
    }

    #[inline]
    pub fn translated(mut self, v: Vector) -> Self {
        self.translate(v);
        self
    }

    /// Cut along the line `y = pos.y + cut` into `(lower, upper)`.
    ///
    /// `cut` must lie in `0..=height`.
    pub fn split_horizontally(&self, cut: i32) -> Result<(Rectangle, Rectangle)> {
        if !(0..=self.height).contains(&cut) {
            debug!(cut, extent = self.height, "rejected split cut");
            return Err(GeometryError::CutOutOfRange {
                cut,
                extent: self.height,
            });
        }
        let lower = Rectangle::new(self.width, cut, self.pos)?;
        let upper = Rectangle::new(
            self.width,
            self.height - cut,
            self.pos.translated(Vector::new(0, cut)),
        )?;
        trace!(rect = %self, cut, %lower, %upper, "split horizontally");
        Ok((lower, upper))
    }

    /// Cut along the line `x = pos.x + cut` into `(left, right)`.
    ///
    /// `cut` must lie in `0..=width`.
    pub fn split_vertically(&self, cut: i32) -> Result<(Rectangle, Rectangle)> {
        let (left, right) = self.reflection().split_horizontally(cut)?;
        Ok((left.reflection(), right.reflection()))
    }

    /// Dispatch on `axis`.
    pub fn split(&self, cut: i32, axis: Axis) -> Result<(Rectangle, Rectangle)> {
        match axis {
            Axis::Horizontal => self.split_horizontally(cut),
            Axis::Vertical => self.split_vertically(cut),
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}", self.width, self.height, self.pos)
    }
}

/// True iff `upper` sits directly on top of `lower` with the same width.
pub fn is_mergeable_horizontally(lower: &Rectangle, upper: &Rectangle) -> bool {
    lower.width == upper.width && lower.pos.translated(Vector::new(0, lower.height)) == upper.pos
}

/// True iff `right` sits directly right of `left` with the same height.
pub fn is_mergeable_vertically(left: &Rectangle, right: &Rectangle) -> bool {
    is_mergeable_horizontally(&left.reflection(), &right.reflection())
}

/// Inverse of `Rectangle::split_horizontally`.
pub fn merge_horizontally(lower: &Rectangle, upper: &Rectangle) -> Result<Rectangle> {
    if !is_mergeable_horizontally(lower, upper) {
        debug!(%lower, %upper, "rejected horizontal merge");
        return Err(GeometryError::NotMergeable {
            axis: Axis::Horizontal,
        });
    }
    let merged = Rectangle::new(lower.width, lower.height + upper.height, lower.pos)?;
    trace!(%lower, %upper, %merged, "merged horizontally");
    Ok(merged)
}

/// Inverse of `Rectangle::split_vertically`.
pub fn merge_vertically(left: &Rectangle, right: &Rectangle) -> Result<Rectangle> {
    if !is_mergeable_vertically(left, right) {
        debug!(%left, %right, "rejected vertical merge");
        return Err(GeometryError::NotMergeable {
            axis: Axis::Vertical,
        });
    }
    merge_horizontally(&left.reflection(), &right.reflection()).map(|r| r.reflection())
}

/// Dispatch on `axis`.
pub fn merge(first: &Rectangle, second: &Rectangle, axis: Axis) -> Result<Rectangle> {
    match axis {
        Axis::Horizontal => merge_horizontally(first, second),
        Axis::Vertical => merge_vertically(first, second),
    }
}
