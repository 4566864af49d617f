//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of curated results.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{print_csv, write_csv};
pub use json_format::{print_json, write_json};
pub use plain::{print_error, print_info, print_plain, print_success, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::result::CuratedResult;
use std::io::{self, Write};

/// Write results to `out` in the given format.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[CuratedResult],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, results),
        OutputFormat::Json => write_json(out, results),
        OutputFormat::Csv => write_csv(out, results),
    }
}

/// Format and print results to stdout.
pub fn format_results(results: &[CuratedResult], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(results),
        OutputFormat::Json => print_json(results),
        OutputFormat::Csv => print_csv(results),
    }
}
