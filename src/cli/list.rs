//! List subcommand implementation.

use super::{Context, OutputFormat};
use crate::error::CliResult;
use crate::output;
use crate::result::CuratedResult;
use clap::Parser;

/// List curated results.
#[derive(Parser, Debug)]
pub struct ListCommand {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Only show results of this type (Tweet, Photo, Video)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub result_type: Option<String>,

    /// Sort by posting time, newest first
    #[arg(long)]
    pub newest: bool,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let results = self.collect(ctx)?;

        let format = self.output.unwrap_or_else(|| ctx.default_format());
        output::format_results(&results, format)?;

        Ok(())
    }

    /// Load the stored results this command would show, filtered and sorted.
    pub fn collect(&self, ctx: &Context) -> CliResult<Vec<CuratedResult>> {
        let cache = ctx.open_cache()?;

        let mut results = Vec::new();
        cache.for_each(|result| {
            if self.matches(&result) {
                results.push(result);
            }
        })?;

        if self.newest {
            results.sort_by(|a, b| b.posted_at().cmp(&a.posted_at()));
        }

        Ok(results)
    }

    fn matches(&self, result: &CuratedResult) -> bool {
        self.result_type
            .as_deref()
            .map_or(true, |t| result.result_type().eq_ignore_ascii_case(t))
    }
}
