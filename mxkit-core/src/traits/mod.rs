//! Abstract interfaces for mxkit
//!
//! This module defines the trait abstractions shared by the engines and
//! the owned matrix types built on top of them.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;
