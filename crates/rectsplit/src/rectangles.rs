//! Ordered collections of rectangles with in-place splitting.
//!
//! Order is whatever the caller chooses; adjacency between neighbours is not
//! enforced. `split` keeps the two parts next to each other (`index`,
//! `index + 1`) so `merge_adjacent` can undo it.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::rectangle::{merge, Axis, Rectangle};
use crate::vector::Vector;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangles {
    rects: Vec<Rectangle>,
}

impl Rectangles {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rectangles held.
    #[inline]
    pub fn size(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle> {
        self.rects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Rectangle> {
        self.rects.iter_mut()
    }

    /// Checked read access.
    pub fn get(&self, index: usize) -> Result<&Rectangle> {
        let len = self.rects.len();
        self.rects
            .get(index)
            .ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    /// Checked write access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Rectangle> {
        let len = self.rects.len();
        self.rects
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    /// Sum of all element areas.
    pub fn total_area(&self) -> u64 {
        self.rects.iter().map(Rectangle::area).sum()
    }

    /// Move every rectangle by `v`.
    pub fn translate(&mut self, v: Vector) -> &mut Self {
        for r in &mut self.rects {
            r.translate(v);
        }
        self
    }

    /// Replace element `index` by its lower/left part and insert the
    /// upper/right part right after it. On error the collection is unchanged.
    pub fn split(&mut self, index: usize, cut: i32, axis: Axis) -> Result<()> {
        let (first, second) = self.get(index)?.split(cut, axis)?;
        self.rects[index] = first;
        self.rects.insert(index + 1, second);
        debug!(index, cut, %axis, size = self.rects.len(), "split rectangle in collection");
        Ok(())
    }

    #[inline]
    pub fn split_horizontally(&mut self, index: usize, cut: i32) -> Result<()> {
        self.split(index, cut, Axis::Horizontal)
    }

    #[inline]
    pub fn split_vertically(&mut self, index: usize, cut: i32) -> Result<()> {
        self.split(index, cut, Axis::Vertical)
    }

    /// Merge elements `index` and `index + 1` into one, undoing a `split`.
    /// On error the collection is unchanged.
    pub fn merge_adjacent(&mut self, index: usize, axis: Axis) -> Result<()> {
        let first = *self.get(index)?;
        let second = *self.get(index + 1)?;
        self.rects[index] = merge(&first, &second, axis)?;
        self.rects.remove(index + 1);
        debug!(index, %axis, size = self.rects.len(), "merged rectangles in collection");
        Ok(())
    }
}

impl Index<usize> for Rectangles {
    type Output = Rectangle;

    /// Panics when `index >= size()`; see `get` for the checked form.
    fn index(&self, index: usize) -> &Rectangle {
        &self.rects[index]
    }
}

impl IndexMut<usize> for Rectangles {
    fn index_mut(&mut self, index: usize) -> &mut Rectangle {
        &mut self.rects[index]
    }
}

impl From<Vec<Rectangle>> for Rectangles {
    fn from(rects: Vec<Rectangle>) -> Self {
        Self { rects }
    }
}

impl From<Rectangles> for Vec<Rectangle> {
    fn from(rects: Rectangles) -> Self {
        rects.rects
    }
}

impl FromIterator<Rectangle> for Rectangles {
    fn from_iter<I: IntoIterator<Item = Rectangle>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Rectangles {
    type Item = Rectangle;
    type IntoIter = std::vec::IntoIter<Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rectangles {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

impl fmt::Display for Rectangles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, r) in self.rects.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", r)?;
        }
        f.write_str("]")
    }
}
