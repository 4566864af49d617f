//! Remove subcommand implementation.

use super::Context;
use crate::error::CliResult;
use crate::output;
use crate::types::ResultId;
use clap::Parser;

/// Remove curated results by ID.
#[derive(Parser, Debug)]
pub struct RemoveCommand {
    /// IDs of the results to remove
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

impl RemoveCommand {
    /// Execute the remove command.
    ///
    /// Unknown IDs are reported but not treated as errors.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let ids = self
            .ids
            .iter()
            .map(|id| id.parse::<ResultId>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut cache = ctx.open_cache()?;
        let mut removed = 0;

        for id in &ids {
            if cache.remove_id(id)? {
                removed += 1;
            } else if !ctx.quiet {
                output::print_warning(&format!("no curated result with ID {}", id));
            }
        }

        if !ctx.quiet {
            output::print_success(&format!("Removed {} result(s)", removed));
        }

        Ok(())
    }
}
