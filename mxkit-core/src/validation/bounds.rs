//! Bounds, overlap and length validation for matrix operations
//!
//! Pure checks with no side effects. The engines run them to completion
//! before mutating anything.

use crate::{Delta, Dimensions, MxError, Point, Region};

/// Validate that `point` addresses a cell of the matrix
pub const fn validate_point(point: Point, dims: Dimensions) -> Result<(), MxError> {
    if !dims.contains(point) {
        return Err(MxError::PointOutOfBounds);
    }
    Ok(())
}

/// Validate that `region` lies inside the matrix
///
/// The far edge may coincide with the matrix edge: a region is rejected only
/// when `origin + extent` exceeds the dimension.
pub const fn validate_region(region: Region, dims: Dimensions) -> Result<(), MxError> {
    if !region.fits(dims) {
        return Err(MxError::RegionOutOfBounds);
    }
    Ok(())
}

/// Validate a region swap and return the two regions
///
/// Bounds are checked before overlap, so a swap that is both out of bounds
/// and overlapping reports [`MxError::RegionOutOfBounds`].
pub fn validate_region_swap(
    p1: Point,
    p2: Point,
    delta: Delta,
    dims: Dimensions,
) -> Result<(Region, Region), MxError> {
    let first = Region::new(p1, delta);
    let second = Region::new(p2, delta);

    validate_region(first, dims)?;
    validate_region(second, dims)?;

    if first.overlaps(&second) || second.overlaps(&first) {
        return Err(MxError::RegionOverlap);
    }

    Ok((first, second))
}

/// Validate that a buffer of `len` cells matches the dimensions
///
/// Dimensions whose product overflows `usize` never match.
pub const fn validate_buffer_len(len: usize, dims: Dimensions) -> Result<(), MxError> {
    match dims.checked_len() {
        Some(expected) if expected == len => Ok(()),
        _ => Err(MxError::SizeMismatch),
    }
}
