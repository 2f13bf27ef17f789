//! tm-tools library
//!
//! Small stdin-to-stdout utilities for Travel Mapping data files:
//! - `routes-by-number`: groups the routes of a `.list` file by the number
//!   embedded in their names and reports which numbers up to 999 are absent
//! - `six-digits`: rewrites the coordinate URLs of a `.wpt` file to exactly
//!   six decimal places
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! let input = "A http://www.openstreetmap.org/?lat=1.23456789&lon=2.5\n";
//! let mut output = Vec::new();
//! tm_tools::run_six_digits(Cursor::new(input), &mut output).unwrap();
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "A http://www.openstreetmap.org/?lat=1.234568&lon=2.500000\n"
//! );
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod routes;
pub mod version;
pub mod waypoints;

use cli::args::Args;
use cli::output::get_formatter;
use routes::{RouteReport, RouteTable};
use std::io::{BufRead, Write};

pub use error::{Result, TmToolsError};

/// Exit status for normal completion
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for bad input data or an I/O failure
pub const EXIT_INPUT_ERROR: u8 = 1;
/// Exit status for bad command line arguments
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Read a `.list` file from `reader` and write the route number report.
///
/// Nothing is written until the whole input has been read.
pub fn run_routes_by_number<R: BufRead, W: Write>(
    args: &Args,
    reader: R,
    writer: &mut W,
) -> Result<RouteReport> {
    let table = RouteTable::from_reader(reader)?;
    let report = RouteReport::new(&table, args.upper_bound);

    let formatter = get_formatter(&args.format);
    writer.write_all(formatter.format(&report).as_bytes())?;
    writer.flush()?;

    Ok(report)
}

/// Rewrite a `.wpt` file from `reader` to `writer`, line by line.
///
/// Returns the number of records written.
pub fn run_six_digits<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<usize> {
    waypoints::normalize(reader, writer)
}
