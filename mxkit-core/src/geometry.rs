//! Matrix geometry: dimensions, points and rectangular regions
//!
//! A matrix is a flat row-major buffer described by a [`Dimensions`] value
//! that travels alongside it. Points address single cells as `(x, y)` =
//! `(column, row)`; a [`Region`] pairs an anchor point with a width/height
//! [`Delta`] and covers the half-open area `[x, x + width) × [y, y + height)`.

/// Row and column count of a row-major matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl Dimensions {
    /// The canonical empty matrix, `0x0`
    pub const EMPTY: Self = Self::new(0, 0);

    /// Create a dimension pair
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, `rows * columns`
    ///
    /// Wraps on overflow in release builds; use [`Dimensions::checked_len`]
    /// when the dimensions come from untrusted input.
    pub const fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of cells, or `None` if `rows * columns` overflows
    pub const fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// True if either dimension is zero
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// True if `point` addresses a cell of this matrix
    pub const fn contains(&self, point: Point) -> bool {
        point.x < self.columns && point.y < self.rows
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, columns): (usize, usize)) -> Self {
        Self::new(rows, columns)
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// A cell coordinate: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Point {
    /// The top-left cell
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point from a column and a row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Width (`x`) and height (`y`) of a rectangular region
pub type Delta = Point;

/// A rectangle anchored at `origin` and spanning `extent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Top-left cell
    pub origin: Point,
    /// Width and height
    pub extent: Delta,
}

impl Region {
    /// Create a region
    pub const fn new(origin: Point, extent: Delta) -> Self {
        Self { origin, extent }
    }

    /// True if the region covers no cells
    pub const fn is_empty(&self) -> bool {
        self.extent.x == 0 || self.extent.y == 0
    }

    /// True if the region lies inside a matrix of the given dimensions
    ///
    /// The far edge may land exactly on the matrix boundary. An edge whose
    /// coordinate overflows `usize` never fits.
    pub const fn fits(&self, dims: Dimensions) -> bool {
        let right = match self.origin.x.checked_add(self.extent.x) {
            Some(right) => right,
            None => return false,
        };
        let bottom = match self.origin.y.checked_add(self.extent.y) {
            Some(bottom) => bottom,
            None => return false,
        };
        right <= dims.columns && bottom <= dims.rows
    }

    /// True if the two regions share at least one cell
    ///
    /// A region without cells never overlaps anything.
    pub const fn overlaps(&self, other: &Region) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a, b) = (self.origin, other.origin);
        let (da, db) = (self.extent, other.extent);
        a.x < b.x.saturating_add(db.x)
            && a.x.saturating_add(da.x) > b.x
            && a.y < b.y.saturating_add(db.y)
            && a.y.saturating_add(da.y) > b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::new(2, 3);
        assert_eq!(dims.len(), 6);
        assert!(!dims.is_empty());
        assert!(Dimensions::EMPTY.is_empty());
        assert!(Dimensions::new(4, 0).is_empty());
        assert_eq!(Dimensions::new(usize::MAX, 2).checked_len(), None);

        assert!(dims.contains(Point::new(2, 1)));
        assert!(!dims.contains(Point::new(3, 0)));
        assert!(!dims.contains(Point::new(0, 2)));
    }

    #[test]
    fn test_region_fits() {
        let dims = Dimensions::new(3, 4);

        // Far edge on the boundary is accepted
        assert!(Region::new(Point::new(2, 1), Point::new(2, 2)).fits(dims));
        assert!(!Region::new(Point::new(3, 0), Point::new(2, 1)).fits(dims));
        assert!(!Region::new(Point::new(0, 2), Point::new(1, 2)).fits(dims));
        assert!(!Region::new(Point::new(usize::MAX, 0), Point::new(1, 1)).fits(dims));
    }

    #[test]
    fn test_region_overlaps() {
        let a = Region::new(Point::new(0, 0), Point::new(2, 2));
        let b = Region::new(Point::new(1, 1), Point::new(2, 2));
        let c = Region::new(Point::new(2, 0), Point::new(2, 2));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching edges do not overlap
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));

        let empty = Region::new(Point::new(1, 1), Point::new(0, 3));
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&a));
        assert!(!a.overlaps(&empty));

        // Zero height inside the other rectangle's column range
        let flat = Region::new(Point::new(0, 1), Point::new(2, 0));
        assert!(!flat.overlaps(&a));
        assert!(!b.overlaps(&flat));
    }
}
