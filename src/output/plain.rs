//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::result::CuratedResult;
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "───────────────────────────────────────────────────────────────";

/// Write curated results as a styled table.
pub fn write_plain<W: Write>(out: &mut W, results: &[CuratedResult]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} {} curated result(s)",
        style("Curator").cyan().bold(),
        style(results.len()).white().bold()
    )?;
    writeln!(out)?;

    if results.is_empty() {
        writeln!(out, "  {}", style("No curated results.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(
        out,
        "  {:<6}  {:<16}  {:<16}  {}",
        style("TYPE").bold(),
        style("ID").bold(),
        style("AUTHOR").bold(),
        style("SUMMARY").bold()
    )?;
    writeln!(out, "  {}", style(RULE).dim())?;

    for result in results {
        let type_style = match result {
            CuratedResult::Tweet(_) => Style::new().blue(),
            CuratedResult::Photo(_) => Style::new().green(),
            CuratedResult::Video(_) => Style::new().magenta(),
        };

        writeln!(
            out,
            "  {:<6}  {:<16}  {:<16}  {}",
            type_style.apply_to(result.result_type()),
            truncate_string(result.result_id().as_str(), 16),
            truncate_string(result.author(), 16),
            style(truncate_string(result.summary(), 30)).dim()
        )?;
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out)?;

    Ok(())
}

/// Print curated results to stdout as a styled table.
pub fn print_plain(results: &[CuratedResult]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, results)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Truncate a string to a maximum number of characters, adding an ellipsis
/// if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
