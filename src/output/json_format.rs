//! JSON output formatting.

use crate::result::CuratedResult;
use std::io::{self, Write};

/// Write results as a pretty-printed JSON array of stored records.
pub fn write_json<W: Write>(out: &mut W, results: &[CuratedResult]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

/// Print results in JSON format.
pub fn print_json(results: &[CuratedResult]) -> io::Result<()> {
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), results)
}
