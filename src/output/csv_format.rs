//! CSV output formatting.

use crate::result::CuratedResult;
use std::io::{self, Write};

/// Write results as CSV, one row per result.
pub fn write_csv<W: Write>(out: W, results: &[CuratedResult]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["result_type", "result_id", "author", "url", "posted_at", "summary"])?;

    for result in results {
        wtr.write_record([
            result.result_type(),
            result.result_id().as_str(),
            result.author(),
            result.url().unwrap_or(""),
            &result.posted_at().map_or(String::new(), |t| t.to_rfc3339()),
            result.summary(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print results in CSV format.
pub fn print_csv(results: &[CuratedResult]) -> io::Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), results)
}
