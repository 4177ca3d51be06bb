//! Integer plane geometry with reversible rectangle splitting.
//!
//! Layout
//! - `Position` / `Vector`: absolute location vs. displacement, never interchangeable.
//! - `Rectangle`: non-negative size plus lower-left corner; split/merge algebra.
//! - `Rectangles`: ordered, index-addressed group with in-place splitting.
//!
//! Conventions
//! - Vertical operations are horizontal ones conjugated by `reflection()`
//!   (mirror across x = y), so both axes share one code path.
//! - Every precondition failure is a `GeometryError`; nothing panics on bad
//!   input except `Index`/`IndexMut`, which behave like slice indexing.
//! - Coordinates use plain `i32` arithmetic. Overflow panics when overflow
//!   checks are on (the workspace `dev` profile) and wraps otherwise.

pub mod error;
pub mod ops;
pub mod position;
pub mod rand;
pub mod rectangle;
pub mod rectangles;
pub mod vector;

pub use error::{GeometryError, Result};
pub use position::Position;
pub use rectangle::{
    is_mergeable_horizontally, is_mergeable_vertically, merge, merge_horizontally,
    merge_vertically, Axis, Rectangle,
};
pub use rectangles::Rectangles;
pub use vector::Vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{
        collapse, draw_partition, regenerate, PartitionCfg, PartitionSample, ReplayToken,
        SplitStep,
    };
    pub use crate::{
        is_mergeable_horizontally, is_mergeable_vertically, merge_horizontally, merge_vertically,
        Axis, GeometryError, Position, Rectangle, Rectangles, Vector,
    };
}

#[cfg(test)]
mod tests;
