//! ASCII table rendering
//!
//! A matrix prints as a bordered table, one line per row:
//!
//! ```text
//! -------------
//! | 1 | 2 | 3 |
//! | 4 | 5 | 6 |
//! -------------
//! ```
//!
//! Every column has the same width, derived from the widest rendered value.

use std::fmt::{self, Display, Write as _};
use std::io::Write;

use mxkit_core::{index, validate_buffer_len, Dimensions};
use tracing::{debug, instrument};

use crate::{Result, TableConfig};

/// Counts characters written through `fmt::Write` without storing them
struct WidthCounter(usize);

impl fmt::Write for WidthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

fn display_width<T: Display>(value: &T) -> usize {
    let mut counter = WidthCounter(0);
    match write!(counter, "{value}") {
        Ok(()) => counter.0,
        // Only a failing `Display` impl ends up here
        Err(_) => 0,
    }
}

/// Widest rendered value, sign included; 0 for an empty slice
pub fn max_width<T: Display>(values: &[T]) -> usize {
    values.iter().map(display_width).max().unwrap_or(0)
}

/// Print `values` as a table using the default layout
///
/// Fails with [`MxError::SizeMismatch`](mxkit_core::MxError::SizeMismatch)
/// if the value count does not match the dimensions. A `0x0` matrix prints
/// nothing.
pub fn print_matrix<W: Write, T: Display>(
    out: &mut W,
    dims: Dimensions,
    values: &[T],
) -> Result<()> {
    print_matrix_with(out, dims, values, &TableConfig::default())
}

/// Print `values` as a table with a custom layout
#[instrument(level = "debug", skip_all, fields(rows = dims.rows, columns = dims.columns))]
pub fn print_matrix_with<W: Write, T: Display>(
    out: &mut W,
    dims: Dimensions,
    values: &[T],
    config: &TableConfig,
) -> Result<()> {
    if dims == Dimensions::EMPTY {
        return Ok(());
    }
    validate_buffer_len(values.len(), dims)?;

    let mut rendered = String::new();
    write_table(&mut rendered, dims, values, config)
        .map_err(|_| std::io::Error::other("table formatting failed"))?;
    out.write_all(rendered.as_bytes())?;

    debug!(bytes = rendered.len(), "printed matrix table");
    Ok(())
}

/// Render a table whose value count is already known to match `dims`
pub(crate) fn write_table<W: fmt::Write, T: Display>(
    out: &mut W,
    dims: Dimensions,
    values: &[T],
    config: &TableConfig,
) -> fmt::Result {
    if dims == Dimensions::EMPTY {
        return Ok(());
    }

    let column_width = config.column_width(max_width(values));
    let border: String = std::iter::repeat(config.border)
        .take(config.border_len(dims.columns, column_width))
        .collect();
    let separator = config.separator;

    writeln!(out, "{border}")?;
    for row in 0..dims.rows {
        out.write_char(separator)?;
        for column in 0..dims.columns {
            let value = index::cell(values, row, column, dims);
            write!(out, "{value:>column_width$} {separator}")?;
        }
        out.write_char('\n')?;
    }
    writeln!(out, "{border}")
}
