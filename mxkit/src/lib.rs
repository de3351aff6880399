//! mxkit - in-memory matrix toolkit
//!
//! This library reads whitespace-delimited integer matrices and raw byte
//! matrices from text, renders matrices as aligned ASCII tables, and
//! rotates or swaps their contents in place.
//!
//! ## Architecture
//!
//! mxkit splits pure logic from I/O:
//!
//! - **mxkit-core**: dimensions, points, the cell trait and the rotation and
//!   region-swap engines (`no_std`, no I/O)
//! - **mxkit**: owned matrices, the text codec, table rendering and the
//!   `mxkit` command-line tool
//!
//! ## Quick Start
//!
//! ```rust
//! use mxkit::{read_matrix, Grid, Point};
//! use std::io::Cursor;
//!
//! fn example() -> Result<(), mxkit::Error> {
//!     let mut matrix = read_matrix(Cursor::new("1 2 3\n4 5 6\n"))?;
//!
//!     matrix.rotate_down();
//!     matrix.swap_points(Point::new(0, 0), Point::new(2, 1))?;
//!
//!     print!("{matrix}");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **serde** (default): `Serialize`/`Deserialize` for dimensions, points,
//!   transforms and matrices
//! - **cli**: the `mxkit` binary

// Re-export core abstractions
pub use mxkit_core::{
    // Geometry
    Delta, Dimensions, Point, Region,
    // Traits
    Cell, Grid,
    // Engines
    normalize_step, rotate_down, rotate_down_by, rotate_right, rotate_right_by, swap_points,
    swap_regions, Transform,
    // Error handling
    ErrorCategory, MxError,
    // Validation utilities
    parse_dimensions, parse_extent, parse_point, validate_buffer_len, validate_region_swap,
};

pub mod codec;
pub mod config;
pub mod error;
pub mod matrix;
pub mod table;

pub use codec::{parse_matrix, parse_matrix_dimensions, parse_stream, read_byte_matrix, read_matrix};
pub use config::TableConfig;
pub use error::{Error, Result};
pub use matrix::{Matrix, MatrixParts};
pub use table::{max_width, print_matrix, print_matrix_with};
