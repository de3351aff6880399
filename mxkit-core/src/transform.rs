//! Transformations as values
//!
//! A [`Transform`] names one engine call together with its arguments, so a
//! sequence of edits can be built up front (for example from command-line
//! flags) and applied later.

use crate::{rotation, swap, Cell, Delta, Dimensions, Point, Result};

/// A single in-place matrix transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// Rotate rows down by the given signed step
    RotateDown(i64),
    /// Rotate columns right by the given signed step
    RotateRight(i64),
    /// Swap two cells
    SwapPoints(Point, Point),
    /// Swap two disjoint rectangles of the given size
    SwapRegions(Point, Point, Delta),
}

impl Transform {
    /// Apply the transformation to a row-major buffer
    ///
    /// A step of exactly one uses the single-step rotation.
    pub fn apply<T: Cell>(self, buf: &mut [T], dims: Dimensions) -> Result<()> {
        match self {
            Transform::RotateDown(1) => rotation::rotate_down(buf, dims),
            Transform::RotateDown(step) => rotation::rotate_down_by(buf, dims, step),
            Transform::RotateRight(1) => rotation::rotate_right(buf, dims),
            Transform::RotateRight(step) => rotation::rotate_right_by(buf, dims, step),
            Transform::SwapPoints(p1, p2) => swap::swap_points(buf, dims, p1, p2)?,
            Transform::SwapRegions(p1, p2, delta) => {
                swap::swap_regions(buf, dims, p1, p2, delta)?
            }
        }
        Ok(())
    }

    /// True if the transformation can fail validation
    pub const fn is_fallible(&self) -> bool {
        matches!(self, Transform::SwapPoints(..) | Transform::SwapRegions(..))
    }
}
