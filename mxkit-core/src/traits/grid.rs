//! Dense grid abstraction
//!
//! This module defines the trait implemented by owned matrix types. The
//! transformation methods are provided on top of three accessors, so an
//! implementor only has to expose its buffer and dimensions.

use super::cell::Cell;
use crate::{index, rotation, swap, Delta, Dimensions, Point, Result, Transform};

/// Row-major matrix with a fixed shape
///
/// Implementors must keep `cells().len() == dimensions().len()`; the
/// provided methods rely on it and may panic otherwise.
pub trait Grid {
    /// The cell type stored in this grid
    type Cell: Cell;

    /// Get the dimensions of the grid
    fn dimensions(&self) -> Dimensions;

    /// Get the row-major cell buffer
    fn cells(&self) -> &[Self::Cell];

    /// Get the row-major cell buffer mutably
    fn cells_mut(&mut self) -> &mut [Self::Cell];

    /// Get the cell at `(row, column)`, or `None` if out of bounds
    fn get(&self, row: usize, column: usize) -> Option<Self::Cell> {
        let dims = self.dimensions();
        if dims.contains(Point::new(column, row)) {
            Some(*index::cell(self.cells(), row, column, dims))
        } else {
            None
        }
    }

    /// Get all cells of a row, or `None` if out of bounds
    fn row(&self, row: usize) -> Option<&[Self::Cell]> {
        let dims = self.dimensions();
        if row >= dims.rows {
            return None;
        }
        let start = index::offset(row, 0, dims);
        self.cells().get(start..start + dims.columns)
    }

    /// Rotate all rows down by one
    fn rotate_down(&mut self) {
        let dims = self.dimensions();
        rotation::rotate_down(self.cells_mut(), dims);
    }

    /// Rotate all rows down by `step`; negative steps rotate up
    fn rotate_down_by(&mut self, step: i64) {
        let dims = self.dimensions();
        rotation::rotate_down_by(self.cells_mut(), dims, step);
    }

    /// Rotate all columns right by one
    fn rotate_right(&mut self) {
        let dims = self.dimensions();
        rotation::rotate_right(self.cells_mut(), dims);
    }

    /// Rotate all columns right by `step`; negative steps rotate left
    fn rotate_right_by(&mut self, step: i64) {
        let dims = self.dimensions();
        rotation::rotate_right_by(self.cells_mut(), dims, step);
    }

    /// Swap two cells
    fn swap_points(&mut self, p1: Point, p2: Point) -> Result<()> {
        let dims = self.dimensions();
        swap::swap_points(self.cells_mut(), dims, p1, p2)
    }

    /// Swap two disjoint rectangles of size `delta`
    fn swap_regions(&mut self, p1: Point, p2: Point, delta: Delta) -> Result<()> {
        let dims = self.dimensions();
        swap::swap_regions(self.cells_mut(), dims, p1, p2, delta)
    }

    /// Apply a single transformation
    fn apply(&mut self, transform: Transform) -> Result<()> {
        let dims = self.dimensions();
        transform.apply(self.cells_mut(), dims)
    }
}
