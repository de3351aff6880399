use mxkit::{read_matrix, Grid, Point, TableConfig, Transform};
use std::io::Cursor;

fn main() -> Result<(), mxkit::Error> {
    println!("mxkit Rotation and Swap Example");

    let input = "1 2 3 4\n5 6 7 8\n9 10 11 12\n";
    let mut matrix = read_matrix(Cursor::new(input))?;
    println!("\nParsed {} matrix:", matrix.dimensions());
    print!("{matrix}");

    // Rotate rows down by one, then columns left by one
    matrix.transform_all([Transform::RotateDown(1), Transform::RotateRight(-1)])?;
    println!("\nAfter rotating down and left:");
    print!("{matrix}");

    // Swap the top-left and bottom-right 2x1 blocks
    matrix.swap_regions(Point::new(0, 0), Point::new(2, 2), Point::new(2, 1))?;
    println!("\nAfter swapping corner blocks:");
    print!("{matrix}");

    match matrix.swap_regions(Point::new(0, 0), Point::new(1, 0), Point::new(2, 2)) {
        Ok(()) => println!("\nUnexpected success"),
        Err(err) => println!("\nOverlapping swap rejected: {err}"),
    }

    let config = TableConfig::default().with_padding(2).with_border('=');
    let mut out = std::io::stdout();
    println!("\nWith a wider layout:");
    mxkit::print_matrix_with(&mut out, matrix.dimensions(), matrix.as_slice(), &config)?;

    Ok(())
}
