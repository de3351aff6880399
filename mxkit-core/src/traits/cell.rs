//! Cell type constraints for matrix buffers
//!
//! This module defines the trait that constrains what types can be stored
//! in a matrix buffer handled by the rotation and swap engines.

use bytemuck::Pod;
use core::fmt::Debug;

/// Trait for types that can be stored as matrix cells
///
/// Cells must be plain old data:
/// - `Pod`: copyable, and an all-zero bit pattern is a valid value, so
///   scratch buffers can be created zeroed before they are filled
/// - `PartialEq`: transformed buffers can be compared
/// - `Debug`: cells show up in assertion messages
pub trait Cell: Pod + PartialEq + Debug {
    /// Type name used in diagnostics
    const NAME: &'static str;
}

macro_rules! impl_cell {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Cell for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

impl_cell!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);
