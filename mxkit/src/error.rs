//! Error type for the std layer
//!
//! Wraps the core [`MxError`] together with I/O failures from the readers
//! and writers the codec works on.

use mxkit_core::{ErrorCategory, MxError};

/// Errors raised by mxkit I/O operations
#[derive(Debug)]
pub enum Error {
    /// Invalid argument detected by validation
    Matrix(MxError),
    /// Reading or writing failed
    Io(std::io::Error),
}

impl Error {
    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Matrix(err) => err.category(),
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// The underlying validation error, if any
    pub fn as_matrix_error(&self) -> Option<MxError> {
        match self {
            Error::Matrix(err) => Some(*err),
            Error::Io(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Matrix(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Matrix(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<MxError> for Error {
    fn from(err: MxError) -> Self {
        Error::Matrix(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type for mxkit I/O operations
pub type Result<T> = std::result::Result<T, Error>;
