#![no_std]

//! mxkit core - dense matrix layout and in-place transformations
//!
//! This crate provides the pure half of mxkit: dimension and point types,
//! the cell trait, and the engines that rotate and swap the contents of a
//! caller-owned row-major buffer. There is no I/O here.
//!
//! A matrix is never a self-describing container. The buffer and its
//! [`Dimensions`] are passed side by side to every call:
//!
//! ```
//! use mxkit_core::{rotate_down, rotate_right, Dimensions};
//!
//! let dims = Dimensions::new(2, 3);
//! let mut cells = [1u8, 2, 3, 4, 5, 6];
//!
//! rotate_down(&mut cells, dims);
//! assert_eq!(cells, [4, 5, 6, 1, 2, 3]);
//!
//! rotate_right(&mut cells, dims);
//! assert_eq!(cells, [6, 4, 5, 3, 1, 2]);
//! ```

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod index;
pub mod rotation;
pub mod swap;
pub mod traits;
pub mod transform;
pub mod validation;

pub use error::*;
pub use geometry::*;
pub use rotation::{normalize_step, rotate_down, rotate_down_by, rotate_right, rotate_right_by};
pub use swap::{swap_points, swap_regions};
pub use traits::*;
pub use transform::Transform;
pub use validation::{
    parse_dimensions, parse_extent, parse_point, validate_buffer_len, validate_point,
    validate_region, validate_region_swap,
};
