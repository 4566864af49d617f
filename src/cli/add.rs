//! Add subcommand implementation.
//!
//! Handles `curator add <FILE>`, reading result records as JSON.

use super::Context;
use crate::error::{CliError, CliResult, ResultError};
use crate::output;
use crate::result::{CuratedResult, ResultFactory, ResultRegistry};
use clap::Parser;
use serde_json::Value;
use std::fs;
use std::io;

/// Curate results from a JSON file.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// JSON file holding one result object or an array of them
    ///
    /// Each object needs a `resultType` (Tweet, Photo, Video) and a
    /// `resultId`. Use "-" to read from stdin.
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: String,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let content = if self.input == "-" {
            io::read_to_string(io::stdin())?
        } else {
            fs::read_to_string(&self.input)?
        };

        let registry = ResultRegistry::default();
        let results = parse_results(&content, &registry).map_err(|e| match e {
            ResultError::UnknownType(tag) => CliError::Other(format!(
                "unknown result type '{}', expected one of: {}",
                tag,
                registry.tags().join(", ")
            )),
            other => other.into(),
        })?;
        let mut cache = ctx.open_cache()?;

        for result in &results {
            cache.add(result)?;
            if ctx.verbose && !ctx.quiet {
                output::print_info(&format!("curated {}", result));
            }
        }

        if !ctx.quiet {
            output::print_success(&format!("Curated {} result(s)", results.len()));
        }

        Ok(())
    }
}

/// Parse one result object or an array of them.
///
/// Every record is validated before any is returned, so a bad entry rejects
/// the whole input.
pub fn parse_results<F: ResultFactory>(
    content: &str,
    factory: &F,
) -> Result<Vec<CuratedResult>, ResultError> {
    let value: Value = serde_json::from_str(content).map_err(ResultError::Parse)?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| factory.from_value(item))
            .collect(),
        single => Ok(vec![factory.from_value(single)?]),
    }
}
