//! Cell and rectangular region exchange
//!
//! Both operations validate completely before the first cell moves, so an
//! error leaves the buffer exactly as it was. On an empty matrix they are
//! no-ops.

use crate::validation::{validate_point, validate_region_swap};
use crate::{index, Delta, Dimensions, Point, Result};

/// Swap the cells at `p1` and `p2`
///
/// Fails with [`MxError::PointOutOfBounds`](crate::MxError::PointOutOfBounds)
/// if either point lies outside the matrix. Swapping a point with itself is
/// allowed and changes nothing.
pub fn swap_points<T>(buf: &mut [T], dims: Dimensions, p1: Point, p2: Point) -> Result<()> {
    if dims.is_empty() {
        return Ok(());
    }
    validate_point(p1, dims)?;
    validate_point(p2, dims)?;

    buf.swap(index::offset(p1.y, p1.x, dims), index::offset(p2.y, p2.x, dims));
    Ok(())
}

/// Swap two equally sized rectangles anchored at `p1` and `p2`
///
/// `delta.x` is the width and `delta.y` the height of both rectangles.
/// Fails with [`MxError::RegionOutOfBounds`](crate::MxError::RegionOutOfBounds)
/// if either rectangle extends past the matrix edge and with
/// [`MxError::RegionOverlap`](crate::MxError::RegionOverlap) if they share a cell.
pub fn swap_regions<T>(
    buf: &mut [T],
    dims: Dimensions,
    p1: Point,
    p2: Point,
    delta: Delta,
) -> Result<()> {
    if dims.is_empty() {
        return Ok(());
    }
    validate_region_swap(p1, p2, delta, dims)?;

    // Disjoint regions: every cell is touched exactly once, no scratch needed.
    for i in 0..delta.y {
        for j in 0..delta.x {
            buf.swap(
                index::offset(p1.y + i, p1.x + j, dims),
                index::offset(p2.y + i, p2.x + j, dims),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MxError;
    use alloc::vec::Vec;

    fn sample() -> (Vec<u8>, Dimensions) {
        ((0..20).collect(), Dimensions::new(4, 5))
    }

    #[test]
    fn test_swap_points() {
        let (mut buf, dims) = sample();
        swap_points(&mut buf, dims, Point::new(0, 0), Point::new(4, 3)).unwrap();
        assert_eq!(buf[0], 19);
        assert_eq!(buf[19], 0);

        // x addresses columns, y addresses rows
        swap_points(&mut buf, dims, Point::new(1, 0), Point::new(0, 2)).unwrap();
        assert_eq!(buf[1], 10);
        assert_eq!(buf[10], 1);
    }

    #[test]
    fn test_swap_points_same_point() {
        let (mut buf, dims) = sample();
        let original = buf.clone();
        swap_points(&mut buf, dims, Point::new(2, 3), Point::new(2, 3)).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_swap_points_out_of_bounds() {
        let (mut buf, dims) = sample();
        let original = buf.clone();

        assert_eq!(
            swap_points(&mut buf, dims, Point::new(5, 0), Point::new(0, 0)),
            Err(MxError::PointOutOfBounds)
        );
        assert_eq!(
            swap_points(&mut buf, dims, Point::new(0, 0), Point::new(0, 4)),
            Err(MxError::PointOutOfBounds)
        );
        // Non-square: column 4 exists, row 4 does not
        assert_eq!(
            swap_points(&mut buf, dims, Point::new(4, 0), Point::new(0, 3)),
            Ok(())
        );
        swap_points(&mut buf, dims, Point::new(4, 0), Point::new(0, 3)).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_swap_regions() {
        let (mut buf, dims) = sample();
        swap_regions(&mut buf, dims, Point::new(0, 0), Point::new(3, 2), Point::new(2, 2)).unwrap();
        assert_eq!(
            buf,
            [13, 14, 2, 3, 4, 18, 19, 7, 8, 9, 10, 11, 12, 0, 1, 15, 16, 17, 5, 6]
        );
    }

    #[test]
    fn test_swap_regions_twice_restores() {
        let (mut buf, dims) = sample();
        let original = buf.clone();
        let (p1, p2, delta) = (Point::new(0, 1), Point::new(2, 1), Point::new(2, 3));

        swap_regions(&mut buf, dims, p1, p2, delta).unwrap();
        assert_ne!(buf, original);
        swap_regions(&mut buf, dims, p1, p2, delta).unwrap();
        assert_eq!(buf, original);
    }

    #[test]
    fn test_swap_regions_rejected() {
        let (mut buf, dims) = sample();
        let original = buf.clone();

        assert_eq!(
            swap_regions(&mut buf, dims, Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)),
            Err(MxError::RegionOverlap)
        );
        assert_eq!(
            swap_regions(&mut buf, dims, Point::new(0, 0), Point::new(4, 0), Point::new(2, 1)),
            Err(MxError::RegionOutOfBounds)
        );
        assert_eq!(
            swap_regions(&mut buf, dims, Point::new(0, 3), Point::new(3, 0), Point::new(1, 2)),
            Err(MxError::RegionOutOfBounds)
        );
        assert_eq!(buf, original);
    }

    #[test]
    fn test_empty_matrix() {
        let mut buf: Vec<u8> = Vec::new();
        assert_eq!(
            swap_points(&mut buf, Dimensions::EMPTY, Point::new(3, 3), Point::ORIGIN),
            Ok(())
        );
        assert_eq!(
            swap_regions(
                &mut buf,
                Dimensions::EMPTY,
                Point::ORIGIN,
                Point::ORIGIN,
                Point::new(1, 1)
            ),
            Ok(())
        );
        assert!(buf.is_empty());
    }
}
