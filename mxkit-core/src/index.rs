//! Row-major cell addressing
//!
//! The only place that turns a `(row, column)` pair into a buffer offset.
//! Callers validate coordinates first; these helpers rely on slice indexing
//! alone.

use crate::Dimensions;

/// Flat offset of `(row, column)`
#[inline]
pub const fn offset(row: usize, column: usize, dims: Dimensions) -> usize {
    row * dims.columns + column
}

/// Cell at `(row, column)`
#[inline]
pub fn cell<T>(buf: &[T], row: usize, column: usize, dims: Dimensions) -> &T {
    &buf[offset(row, column, dims)]
}

/// Mutable cell at `(row, column)`
#[inline]
pub fn cell_mut<T>(buf: &mut [T], row: usize, column: usize, dims: Dimensions) -> &mut T {
    &mut buf[offset(row, column, dims)]
}
