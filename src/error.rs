//! Error types for Curator.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a key-value store backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("failed to load store: {0}")]
    LoadFailed(String),

    #[error("failed to save store: {0}")]
    SaveFailed(String),

    #[error("storage directory error: {0}")]
    DirectoryError(String),

    #[error("store file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while encoding or reconstructing a curated result.
#[derive(Error, Debug)]
pub enum ResultError {
    #[error("malformed stored record: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("stored record has no string `resultType` field")]
    MissingType,

    #[error("unknown result type: {0}")]
    UnknownType(String),

    #[error("invalid {result_type} record: {source}")]
    InvalidRecord {
        result_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid result ID: {0}")]
    InvalidId(String),

    #[error("failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type alias for result model operations.
pub type ResultResult<T> = Result<T, ResultError>;

/// Errors surfaced by the curated result cache.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Result(#[from] ResultError),
}

/// Result type alias for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors surfaced by CLI subcommands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::Cache(CacheError::Storage(e))
    }
}

impl From<ResultError> for CliError {
    fn from(e: ResultError) -> Self {
        Self::Cache(CacheError::Result(e))
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
