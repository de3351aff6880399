//! mxkit command-line tool
//!
//! Reads a matrix from a file, optionally rotates or swaps part of it, and
//! prints the result as a table, as JSON, or (for byte matrices) as raw bytes.
//! Set `RUST_LOG=debug` to see what the codec is doing.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mxkit::{
    parse_dimensions, parse_extent, parse_point, print_matrix, read_byte_matrix, read_matrix,
    Dimensions, Matrix, Point, Transform,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "mxkit - print, rotate and swap matrices stored as text")]
struct Cli {
    /// Emit the resulting matrix as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an integer matrix as a table
    Show {
        /// File with one whitespace-separated row per line
        file: PathBuf,
    },
    /// Rotate the rows and/or columns of an integer matrix
    Rotate {
        /// File with one whitespace-separated row per line
        file: PathBuf,

        /// Rows to rotate down (negative rotates up)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        down: i64,

        /// Columns to rotate right (negative rotates left)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        right: i64,
    },
    /// Swap two cells, or two rectangles when --size is given
    Swap {
        /// File with one whitespace-separated row per line
        file: PathBuf,

        /// First anchor (format: column,row)
        #[arg(long, value_parser = point_arg)]
        first: Point,

        /// Second anchor (format: column,row)
        #[arg(long, value_parser = point_arg)]
        second: Point,

        /// Rectangle size (format: WIDTHxHEIGHT)
        #[arg(long, value_parser = extent_arg)]
        size: Option<Point>,
    },
    /// Rotate a raw byte matrix and write the bytes to stdout
    Bytes {
        /// File whose bytes, newlines included, are the cells
        file: PathBuf,

        /// Matrix dimensions (format: ROWSxCOLS)
        #[arg(long, value_parser = dims_arg)]
        dims: Dimensions,

        /// Rows to rotate down (negative rotates up)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        down: i64,

        /// Columns to rotate right (negative rotates left)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        right: i64,
    },
}

fn point_arg(value: &str) -> Result<Point, String> {
    parse_point(value).map_err(|err| err.to_string())
}

fn extent_arg(value: &str) -> Result<Point, String> {
    parse_extent(value).map_err(|err| err.to_string())
}

fn dims_arg(value: &str) -> Result<Dimensions, String> {
    parse_dimensions(value).map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> mxkit::Result<()> {
    match &cli.command {
        Commands::Show { file } => {
            let matrix = load(file)?;
            emit(&matrix, cli.json)
        }
        Commands::Rotate { file, down, right } => {
            let mut matrix = load(file)?;
            matrix.transform_all(rotations(*down, *right))?;
            emit(&matrix, cli.json)
        }
        Commands::Swap {
            file,
            first,
            second,
            size,
        } => {
            let mut matrix = load(file)?;
            let transform = match size {
                Some(delta) => Transform::SwapRegions(*first, *second, *delta),
                None => Transform::SwapPoints(*first, *second),
            };
            matrix.transform(transform)?;
            emit(&matrix, cli.json)
        }
        Commands::Bytes {
            file,
            dims,
            down,
            right,
        } => {
            debug!(path = %file.display(), %dims, "reading byte matrix");
            let mut matrix = read_byte_matrix(File::open(file)?, *dims)?;
            matrix.transform_all(rotations(*down, *right))?;
            if cli.json {
                emit(&matrix, true)
            } else {
                let mut out = io::stdout().lock();
                out.write_all(matrix.as_bytes())?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

/// Rotations requested on the command line, rows first
fn rotations(down: i64, right: i64) -> Vec<Transform> {
    let mut transforms = Vec::new();
    if down != 0 {
        transforms.push(Transform::RotateDown(down));
    }
    if right != 0 {
        transforms.push(Transform::RotateRight(right));
    }
    transforms
}

fn load(path: &Path) -> mxkit::Result<Matrix<i32>> {
    debug!(path = %path.display(), "reading matrix");
    let file = File::open(path)?;
    read_matrix(BufReader::new(file))
}

fn emit<T: Display + Serialize>(matrix: &Matrix<T>, json: bool) -> mxkit::Result<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut out, matrix).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        print_matrix(&mut out, matrix.dimensions(), matrix.as_slice())?;
    }
    Ok(())
}
