//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `curator add <FILE>` - Curate results from a JSON file or stdin
//! - `curator remove <ID>...` - Remove curated results
//! - `curator list` - Show curated results
//! - `curator export` - Export curated results to a file
//! - `curator clear` - Remove every curated result

mod add;
mod clear;
mod export;
mod list;
mod remove;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use export::ExportCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;

use crate::cache::ResultCache;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::storage::JsonFileStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Curator - keep the search results worth keeping.
///
/// Curated results are stored in a shared key-value file under `curated_`
/// keys, alongside whatever else lives in that file.
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Persistent store for curated search results", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Key-value store file to use
    #[arg(long, global = true, value_name = "PATH", env = "CURATOR_STORE")]
    pub store: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Curate results from a JSON file
    #[command(alias = "a")]
    Add(AddCommand),

    /// Remove curated results by ID
    #[command(alias = "rm")]
    Remove(RemoveCommand),

    /// List curated results
    #[command(alias = "ls")]
    List(ListCommand),

    /// Export curated results
    #[command(alias = "e")]
    Export(ExportCommand),

    /// Remove every curated result
    Clear(ClearCommand),
}

impl Cli {
    /// Run the selected subcommand.
    pub fn run(&self) -> CliResult<()> {
        let ctx = Context::from_cli(self)?;

        match &self.command {
            Commands::Add(cmd) => cmd.execute(&ctx),
            Commands::Remove(cmd) => cmd.execute(&ctx),
            Commands::List(cmd) => cmd.execute(&ctx),
            Commands::Export(cmd) => cmd.execute(&ctx),
            Commands::Clear(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Settings and flags shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub verbose: bool,
    pub quiet: bool,
    pub settings: AppSettings,
    pub store_path: PathBuf,
}

impl Context {
    /// Resolve settings and the store location from global flags.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let settings = match &cli.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        let store_path = settings.resolve_store_file(cli.store.as_deref())?;

        Ok(Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            settings,
            store_path,
        })
    }

    /// Open the curated result cache over the configured store file.
    pub fn open_cache(&self) -> CliResult<ResultCache<JsonFileStore>> {
        let mut store = JsonFileStore::open(&self.store_path)?;
        if let Some(quota) = self.settings.quota() {
            store = store.with_quota(quota);
        }
        tracing::debug!(path = %self.store_path.display(), "using store");
        Ok(ResultCache::new(store))
    }

    /// Output format from settings, falling back to plain.
    pub fn default_format(&self) -> OutputFormat {
        self.settings
            .default_output_format
            .parse()
            .unwrap_or_default()
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_remove() {
        let cli = Cli::try_parse_from(["curator", "--store", "/tmp/s.json", "rm", "1", "2"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s.json")));
        match cli.command {
            Commands::Remove(cmd) => assert_eq!(cmd.ids, vec!["1", "2"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
