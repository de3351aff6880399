//! Parsing utilities for dimension and coordinate strings
//!
//! These are the compact forms used on command lines: `ROWSxCOLS` for
//! dimensions, `WxH` for region sizes and `X,Y` for points. No I/O and no
//! std dependency.

use crate::{Dimensions, MxError, Point};

/// Parse a dimension string in the format "ROWSxCOLS" (or "ROWSXCOLS")
pub fn parse_dimensions(text: &str) -> Result<Dimensions, MxError> {
    let (rows, columns) = split_pair(text, &['x', 'X'])?;
    Ok(Dimensions::new(rows, columns))
}

/// Parse a region size in the format "WIDTHxHEIGHT"
///
/// Returned as a [`Point`] delta: `x` is the width, `y` the height.
pub fn parse_extent(text: &str) -> Result<Point, MxError> {
    let (width, height) = split_pair(text, &['x', 'X'])?;
    Ok(Point::new(width, height))
}

/// Parse a point in the format "X,Y" (column, row)
pub fn parse_point(text: &str) -> Result<Point, MxError> {
    let (x, y) = split_pair(text, &[','])?;
    Ok(Point::new(x, y))
}

fn split_pair(text: &str, separators: &[char]) -> Result<(usize, usize), MxError> {
    let text = text.trim();
    let pos = text
        .find(|c: char| separators.contains(&c))
        .ok_or(MxError::InvalidDimensions)?;
    let first = parse_usize(text[..pos].trim())?;
    let second = parse_usize(text[pos + 1..].trim())?;
    Ok((first, second))
}

/// Parse a usize from a string with error handling
///
/// Only ASCII digits are accepted; signs and embedded spaces are rejected.
fn parse_usize(s: &str) -> Result<usize, MxError> {
    // `FromStr` would also take a leading `+`
    if s.is_empty() || !s.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(MxError::InvalidDimensions);
    }
    s.parse().map_err(|_| MxError::InvalidDimensions)
}
