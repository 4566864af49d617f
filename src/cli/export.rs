//! Export subcommand implementation.
//!
//! Handles the `curator export` command for exporting curated results.

use super::{Context, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::types::ResultId;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export curated results.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Only export these IDs
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<String>,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let cache = ctx.open_cache()?;

        let results = if self.ids.is_empty() {
            cache.load_all()?
        } else {
            let mut results = Vec::with_capacity(self.ids.len());
            for raw in &self.ids {
                let id: ResultId = raw.parse()?;
                let result = cache
                    .get(&id)?
                    .ok_or_else(|| CliError::Other(format!("no curated result with ID {}", id)))?;
                results.push(result);
            }
            results
        };

        if let Some(ref path) = self.output_file {
            let mut out = BufWriter::new(File::create(path)?);
            output::write_results(&mut out, &results, self.format)?;
            out.flush()?;

            if !ctx.quiet {
                output::print_success(&format!(
                    "Exported {} result(s) to {}",
                    results.len(),
                    path.display()
                ));
            }
        } else {
            let stdout = io::stdout();
            output::write_results(&mut stdout.lock(), &results, self.format)?;
        }

        Ok(())
    }
}
