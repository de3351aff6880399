//! Validation utilities for matrix operations
//!
//! This module contains pure validation and parsing functions with no I/O
//! dependencies: bounds and overlap checks for the engines, and parsers for
//! the compact dimension/point notation.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_buffer_len, validate_point, validate_region, validate_region_swap};
pub use parsing::{parse_dimensions, parse_extent, parse_point};
