//! End-to-end text codec scenarios

use std::io::Cursor;

use mxkit::{
    parse_matrix, parse_matrix_dimensions, parse_stream, print_matrix, read_byte_matrix,
    read_matrix, Dimensions, ErrorCategory, Grid, Matrix, MxError, Point, Transform,
};

fn printed<T: std::fmt::Display>(dims: Dimensions, values: &[T]) -> String {
    let mut out = Vec::new();
    print_matrix(&mut out, dims, values).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parse_then_print() {
    let mut input = Cursor::new("1 2 3\n4 5 6\n");
    let dims = parse_matrix_dimensions(&mut input).unwrap();
    assert_eq!(dims, Dimensions::new(2, 3));

    let values = parse_matrix(&mut input, dims).unwrap();
    assert_eq!(values, [1, 2, 3, 4, 5, 6]);

    let table = printed(dims, &values);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines, ["-------------", "| 1 | 2 | 3 |", "| 4 | 5 | 6 |", "-------------"]);
    assert!(lines.iter().all(|line| line.len() == 13));
}

#[test]
fn wrong_token_count_is_invalid_argument() {
    let err = parse_matrix_dimensions(Cursor::new("1 2 3\n4 5\n6 7 8\n")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert_eq!(err.as_matrix_error(), Some(MxError::InconsistentColumns));

    // A whitespace-only line is a row with no tokens
    let err = parse_matrix_dimensions(Cursor::new("1 2\n   \n3 4\n")).unwrap_err();
    assert_eq!(err.as_matrix_error(), Some(MxError::InconsistentColumns));
}

#[test]
fn bad_tokens_report_their_position() {
    let err = read_matrix(Cursor::new("1 2\n\n3 4.5\n")).unwrap_err();
    assert_eq!(
        err.as_matrix_error(),
        Some(MxError::InvalidToken { line: 3, column: 2 })
    );
    assert_eq!(err.to_string(), "Invalid matrix value at line 3, token 2");
}

#[test]
fn value_count_must_match_dimensions() {
    let err = parse_matrix(Cursor::new("1 2\n3 4\n"), Dimensions::new(2, 3)).unwrap_err();
    assert_eq!(err.as_matrix_error(), Some(MxError::SizeMismatch));

    let mut out = Vec::new();
    let err = print_matrix(&mut out, Dimensions::new(3, 1), &[1, 2]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidArgument);
    assert!(out.is_empty());
}

#[test]
fn wide_and_negative_values_align() {
    let matrix = read_matrix(Cursor::new("-12 3\n4 1000\n")).unwrap();
    let table = printed(matrix.dimensions(), matrix.as_slice());
    assert_eq!(
        table,
        "---------------\n\
         |  -12 |    3 |\n\
         |    4 | 1000 |\n\
         ---------------\n"
    );
    // Column width 5, so the border is 2 * (5 + 2) + 1 characters
    assert!(table.lines().all(|line| line.len() == 15));
}

#[test]
fn rotate_parsed_matrix() {
    let mut matrix = read_matrix(Cursor::new("1 2 3\n4 5 6\n")).unwrap();
    matrix.rotate_right();
    assert_eq!(matrix.as_slice(), [3, 1, 2, 6, 4, 5]);

    matrix.transform(Transform::RotateDown(1)).unwrap();
    assert_eq!(
        matrix.to_string(),
        "-------------\n| 6 | 4 | 5 |\n| 3 | 1 | 2 |\n-------------\n"
    );
}

#[test]
fn byte_matrix_keeps_whitespace() {
    let mut matrix = read_byte_matrix(Cursor::new("ab\ncd\n"), Dimensions::new(2, 3)).unwrap();
    assert_eq!(matrix.as_slice(), b"ab\ncd\n");

    matrix.rotate_down();
    assert_eq!(matrix.as_bytes(), b"cd\nab\n");

    matrix.swap_points(Point::new(0, 0), Point::new(1, 1)).unwrap();
    assert_eq!(matrix.as_bytes(), b"bd\nac\n");

    let err = parse_stream(Cursor::new("ab\ncd"), Dimensions::new(2, 3)).unwrap_err();
    assert_eq!(err.as_matrix_error(), Some(MxError::SizeMismatch));
}

#[test]
fn empty_input() {
    let matrix = read_matrix(Cursor::new("\n\n")).unwrap();
    assert_eq!(matrix, Matrix::empty());
    assert_eq!(printed::<i32>(Dimensions::EMPTY, &[]), "");
}

#[test]
fn io_errors_keep_their_source() {
    let err = mxkit::Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert_eq!(err.category(), ErrorCategory::Io);
    assert!(err.as_matrix_error().is_none());
    assert!(std::error::Error::source(&err).is_some());
}
