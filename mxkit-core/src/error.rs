//! Error types for mxkit operations

/// Errors that can occur during mxkit operations
///
/// Every variant is raised before the target buffer is touched, so a failed
/// call never leaves a matrix half-transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MxError {
    /// A point lies outside the matrix
    PointOutOfBounds,
    /// A rectangle extends past the matrix edge
    RegionOutOfBounds,
    /// The two rectangles of a region swap share at least one cell
    RegionOverlap,
    /// Lines of a text matrix carry different token counts
    InconsistentColumns,
    /// Number of cells does not match `rows * columns`
    SizeMismatch,
    /// A token is not a valid matrix value (1-based line and token position)
    InvalidToken { line: usize, column: usize },
    /// A dimension or point string is malformed
    InvalidDimensions,
}

/// Broad classes of failure, used by callers that only need to branch on
/// the kind of problem rather than the exact cause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller supplied arguments the operation cannot accept
    InvalidArgument,
    /// The underlying reader or writer failed (std layer only)
    Io,
}

impl MxError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::InvalidArgument
    }
}

impl core::fmt::Display for MxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MxError::PointOutOfBounds => write!(f, "Points are outside of matrix bounds"),
            MxError::RegionOutOfBounds => write!(f, "Rectangles are outside of matrix bounds"),
            MxError::RegionOverlap => write!(f, "Rectangles overlap"),
            MxError::InconsistentColumns => {
                write!(f, "Inconsistent number of columns in matrix")
            }
            MxError::SizeMismatch => {
                write!(f, "Matrix dimensions do not match the number of elements")
            }
            MxError::InvalidToken { line, column } => {
                write!(f, "Invalid matrix value at line {line}, token {column}")
            }
            MxError::InvalidDimensions => write!(f, "Malformed dimension string"),
        }
    }
}

/// Result type for mxkit operations
pub type Result<T> = core::result::Result<T, MxError>;
