//! Cyclic row and column rotation
//!
//! All four rotations work in place on a row-major buffer and never fail. A
//! matrix with a zero dimension is left untouched, and signed step counts
//! are folded into `[0, n)` before anything moves.
//!
//! Rows are contiguous, so row rotation copies the rows that wrap around
//! into scratch storage and moves the remaining block with an overlap-safe
//! copy. Columns are strided: the single-step variant keeps one column of
//! scratch and shifts from the highest column downwards, while the
//! arbitrary-step variant builds the result in a full-size scratch buffer.
//!
//! # Panics
//!
//! Every function expects `buf.len() == dims.len()` and may panic on a
//! shorter buffer.

use alloc::vec::Vec;
use bytemuck::Zeroable;

use crate::{index, Cell, Dimensions};

/// Fold a signed step count into `[0, n)`
///
/// Negative steps map to the equivalent positive rotation, so `-1` becomes
/// `n - 1`. The remainder is taken in `i128`, which keeps `i64::MIN` from
/// overflowing. Returns 0 when `n` is 0.
pub const fn normalize_step(step: i64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    (step as i128).rem_euclid(n as i128) as usize
}

/// Rotate every row down by one; the last row becomes row 0
pub fn rotate_down<T: Cell>(buf: &mut [T], dims: Dimensions) {
    if dims.is_empty() {
        return;
    }
    shift_rows_down(buf, dims, 1);
}

/// Rotate every row down by `step` rows, wrapping at the bottom
///
/// Negative steps rotate up. Any step that is a multiple of the row count
/// leaves the buffer unchanged.
pub fn rotate_down_by<T: Cell>(buf: &mut [T], dims: Dimensions, step: i64) {
    if dims.is_empty() {
        return;
    }
    let step = normalize_step(step, dims.rows);
    if step == 0 {
        return;
    }
    shift_rows_down(buf, dims, step);
}

/// Move the last `count` rows to the top, keeping the order of both blocks
///
/// `count` must be in `1..=dims.rows`.
fn shift_rows_down<T: Cell>(buf: &mut [T], dims: Dimensions, count: usize) {
    debug_assert!(count > 0 && count <= dims.rows);
    debug_assert_eq!(buf.len(), dims.len());

    let split = index::offset(dims.rows - count, 0, dims);
    let end = dims.len();
    let wrapped: Vec<T> = buf[split..end].to_vec();

    // `copy_within` moves as if through a temporary, so the forward-overlapping
    // destination never reads a row it has already overwritten.
    buf.copy_within(..split, wrapped.len());
    buf[..wrapped.len()].copy_from_slice(&wrapped);
}

/// Rotate every column right by one; the last column becomes column 0
pub fn rotate_right<T: Cell>(buf: &mut [T], dims: Dimensions) {
    if dims.is_empty() {
        return;
    }
    debug_assert_eq!(buf.len(), dims.len());

    let last = dims.columns - 1;
    let saved: Vec<T> = (0..dims.rows)
        .map(|row| *index::cell(buf, row, last, dims))
        .collect();

    // Highest column first: column `c - 1` is still intact when `c` reads it.
    for column in (1..dims.columns).rev() {
        for row in 0..dims.rows {
            let value = *index::cell(buf, row, column - 1, dims);
            *index::cell_mut(buf, row, column, dims) = value;
        }
    }

    for (row, value) in saved.into_iter().enumerate() {
        *index::cell_mut(buf, row, 0, dims) = value;
    }
}

/// Rotate every column right by `step` columns, wrapping at the right edge
///
/// Negative steps rotate left. Source column `c` lands in column
/// `(c + step) % columns`.
pub fn rotate_right_by<T: Cell>(buf: &mut [T], dims: Dimensions, step: i64) {
    if dims.is_empty() {
        return;
    }
    let step = normalize_step(step, dims.columns);
    if step == 0 {
        return;
    }
    debug_assert_eq!(buf.len(), dims.len());

    let mut scratch = alloc::vec![<T as Zeroable>::zeroed(); dims.len()];
    for column in 0..dims.columns {
        let target = (column + step) % dims.columns;
        for row in 0..dims.rows {
            *index::cell_mut(&mut scratch, row, target, dims) = *index::cell(buf, row, column, dims);
        }
    }
    buf[..scratch.len()].copy_from_slice(&scratch);
}
