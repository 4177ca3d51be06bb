//! Precondition failures shared by every geometric operation.

use std::fmt;

use crate::rectangle::Axis;

/// Errors surfaced when an operation's precondition does not hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A rectangle was requested with a negative width or height.
    NegativeSize { width: i32, height: i32 },
    /// A split cut lies outside `0..=extent` along the split axis.
    CutOutOfRange { cut: i32, extent: i32 },
    /// The two rectangles do not share an edge of matching length.
    NotMergeable { axis: Axis },
    /// A collection index is outside `0..len`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NegativeSize { width, height } => write!(
                f,
                "rectangle size must be non-negative (got {}x{})",
                width, height
            ),
            GeometryError::CutOutOfRange { cut, extent } => {
                write!(f, "cut {} is outside 0..={}", cut, extent)
            }
            GeometryError::NotMergeable { axis } => {
                write!(f, "rectangles are not {} mergeable", axis)
            }
            GeometryError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for {} rectangles", index, len)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeometryError>;
