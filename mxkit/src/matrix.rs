//! Owned row-major matrix
//!
//! [`Matrix`] bundles a cell buffer with its [`Dimensions`] and keeps
//! `data.len() == rows * columns` from construction onwards. Transformations
//! come from the [`Grid`] trait; [`Matrix::transform`] adds tracing on top.

use std::fmt;

use mxkit_core::{index, validate_buffer_len, Cell, Dimensions, Grid, MxError, Point, Transform};
use tracing::trace;

use crate::table;
use crate::TableConfig;

/// The raw parts of a [`Matrix`], before validation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatrixParts<T> {
    /// Dimensions of the matrix
    pub dims: Dimensions,
    /// Row-major cells
    pub data: Vec<T>,
}

/// A dense matrix that owns its cells
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixParts<T>"))]
pub struct Matrix<T> {
    dims: Dimensions,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a `Matrix` from row-major data
    ///
    /// Fails with [`MxError::SizeMismatch`] unless
    /// `data.len() == rows * columns`.
    pub fn from_data(dims: Dimensions, data: Vec<T>) -> Result<Self, MxError> {
        validate_buffer_len(data.len(), dims)?;
        Ok(Self { dims, data })
    }

    /// Creates an empty matrix (i.e., size 0x0)
    pub fn empty() -> Self {
        Self {
            dims: Dimensions::EMPTY,
            data: Vec::new(),
        }
    }

    /// Get the dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Checks whether the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Get the row-major cells
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its cells
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consume the matrix, returning dimensions and cells
    pub fn into_parts(self) -> MatrixParts<T> {
        MatrixParts {
            dims: self.dims,
            data: self.data,
        }
    }
}

impl<T: Cell> Matrix<T> {
    /// Creates a `Matrix` of the given dimensions with every cell zeroed
    pub fn zeroed(dims: Dimensions) -> Result<Self, MxError> {
        let len = dims.checked_len().ok_or(MxError::SizeMismatch)?;
        Ok(Self {
            dims,
            data: vec![<T as bytemuck::Zeroable>::zeroed(); len],
        })
    }

    /// Sets the cell at `(row, column)`, returning the previous value
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<T, MxError> {
        if !self.dims.contains(Point::new(column, row)) {
            return Err(MxError::PointOutOfBounds);
        }
        let cell = index::cell_mut(&mut self.data, row, column, self.dims);
        Ok(std::mem::replace(cell, value))
    }

    /// View the cells as raw bytes in native endianness
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Apply one transformation in place
    ///
    /// A failed transformation leaves the matrix unchanged.
    pub fn transform(&mut self, transform: Transform) -> Result<(), MxError> {
        trace!(?transform, dims = %self.dims, cell = T::NAME, "applying transform");
        let dims = self.dims;
        transform.apply(&mut self.data, dims)
    }

    /// Apply transformations in order, stopping at the first failure
    ///
    /// Transformations before the failing one stay applied.
    pub fn transform_all<I>(&mut self, transforms: I) -> Result<(), MxError>
    where
        I: IntoIterator<Item = Transform>,
    {
        for transform in transforms {
            self.transform(transform)?;
        }
        Ok(())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = MxError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self, Self::Error> {
        Self::from_data(parts.dims, parts.data)
    }
}

impl<T: Cell> Grid for Matrix<T> {
    type Cell = T;

    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn cells(&self) -> &[T] {
        &self.data
    }

    fn cells_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        table::write_table(f, self.dims, &self.data, &TableConfig::default())
    }
}
