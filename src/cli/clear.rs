//! Clear subcommand implementation.

use super::Context;
use crate::error::CliResult;
use crate::output;
use clap::Parser;

/// Remove every curated result.
///
/// Other data sharing the store file is left in place.
#[derive(Parser, Debug)]
pub struct ClearCommand {
    /// Skip confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl ClearCommand {
    /// Execute the clear command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let mut cache = ctx.open_cache()?;

        if !self.yes {
            let count = cache.len()?;
            output::print_warning(&format!(
                "This will remove {} curated result(s). Re-run with --yes to confirm.",
                count
            ));
            return Ok(());
        }

        let removed = cache.clear()?;
        if !ctx.quiet {
            if ctx.verbose {
                for id in &removed {
                    output::print_info(&format!("removed {}", id));
                }
            }
            output::print_success(&format!("Removed {} curated result(s)", removed.len()));
        }

        Ok(())
    }
}
