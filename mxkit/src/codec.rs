//! Text codec for matrices
//!
//! Integer matrices are written one row per line as whitespace-separated
//! decimal tokens; empty lines are ignored. Byte matrices are read raw:
//! every byte of the input, whitespace and newlines included, is one cell.
//!
//! Integer parsing is two-pass. [`parse_matrix_dimensions`] scans the input
//! and checks that every row has the same width, then [`parse_matrix`] seeks
//! back to the start and collects the values.

use std::io::{BufRead, Read, Seek, SeekFrom};

use mxkit_core::{validate_buffer_len, Dimensions, MxError};
use tracing::{debug, instrument, warn};

use crate::{Error, Matrix, Result};

/// Scan a text matrix and return its dimensions
///
/// Every non-empty line is a row. Fails with
/// [`MxError::InconsistentColumns`] if a row's token count differs from the
/// first row's, and with [`MxError::InvalidToken`] if a token is not an
/// `i32`.
#[instrument(level = "debug", skip_all)]
pub fn parse_matrix_dimensions<R: BufRead>(reader: R) -> Result<Dimensions> {
    let mut rows = 0;
    let mut columns = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let mut count = 0;
        for value in parse_line(&line, index + 1) {
            value?;
            count += 1;
        }

        if rows == 0 {
            columns = count;
        } else if count != columns {
            warn!(line = index + 1, expected = columns, found = count, "inconsistent column count");
            return Err(MxError::InconsistentColumns.into());
        }
        rows += 1;
    }

    debug!(rows, columns, "scanned matrix dimensions");
    Ok(Dimensions::new(rows, columns))
}

/// Read the values of a text matrix whose dimensions are already known
///
/// Seeks to the start of `reader` and flattens all tokens row-major. Fails
/// with [`MxError::SizeMismatch`] if the number of values differs from
/// `rows * columns`. If either dimension is zero nothing is read.
#[instrument(level = "debug", skip_all, fields(rows = dims.rows, columns = dims.columns))]
pub fn parse_matrix<R: BufRead + Seek>(mut reader: R, dims: Dimensions) -> Result<Vec<i32>> {
    if dims.is_empty() {
        return Ok(Vec::new());
    }

    reader.seek(SeekFrom::Start(0))?;

    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        for value in parse_line(&line, index + 1) {
            values.push(value?);
        }
    }

    if let Err(err) = validate_buffer_len(values.len(), dims) {
        warn!(expected = ?dims.checked_len(), found = values.len(), "matrix value count mismatch");
        return Err(err.into());
    }

    debug!(count = values.len(), "parsed matrix values");
    Ok(values)
}

/// Read a raw byte matrix
///
/// Reads `reader` to the end; every byte is a cell. Fails with
/// [`MxError::SizeMismatch`] if the byte count differs from
/// `rows * columns`. A `0x0` matrix returns immediately without reading.
#[instrument(level = "debug", skip_all, fields(rows = dims.rows, columns = dims.columns))]
pub fn parse_stream<R: Read>(mut reader: R, dims: Dimensions) -> Result<Vec<u8>> {
    if dims == Dimensions::EMPTY {
        return Ok(Vec::new());
    }

    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    if let Err(err) = validate_buffer_len(bytes.len(), dims) {
        warn!(found = bytes.len(), "byte count does not match dimensions");
        return Err(err.into());
    }

    debug!(count = bytes.len(), "read byte matrix");
    Ok(bytes)
}

/// Parse a whole text matrix into an owned [`Matrix`]
pub fn read_matrix<R: BufRead + Seek>(mut reader: R) -> Result<Matrix<i32>> {
    let dims = parse_matrix_dimensions(&mut reader)?;
    let values = parse_matrix(reader, dims)?;
    Ok(Matrix::from_data(dims, values)?)
}

/// Read a raw byte matrix into an owned [`Matrix`]
pub fn read_byte_matrix<R: Read>(reader: R, dims: Dimensions) -> Result<Matrix<u8>> {
    let bytes = parse_stream(reader, dims)?;
    Ok(Matrix::from_data(dims, bytes)?)
}

/// Parse the tokens of one line; `line` is the 1-based line number
fn parse_line(line: &str, line_number: usize) -> impl Iterator<Item = Result<i32>> + '_ {
    line.split_whitespace()
        .enumerate()
        .map(move |(position, token)| {
            token.parse::<i32>().map_err(|_| {
                Error::from(MxError::InvalidToken {
                    line: line_number,
                    column: position + 1,
                })
            })
        })
}
