//! # Curator - Persistent Curated Search Results
//!
//! Curator keeps the search results a user chose to save. Each curated result
//! is stored as a JSON record under a `curated_<resultId>` key in a flat
//! key-value store that other subsystems may share; keys outside that prefix
//! are never touched.
//!
//! ## Example Usage
//!
//! ```rust
//! use curator::cache::ResultCache;
//! use curator::result::{CuratedResult, Photo};
//! use curator::storage::MemoryStore;
//! use curator::types::ResultId;
//!
//! let mut cache = ResultCache::new(MemoryStore::new());
//! let photo: CuratedResult = Photo::new(ResultId::new("1").unwrap(), "alice").into();
//! cache.add(&photo).unwrap();
//!
//! cache.for_each(|result| println!("{}", result)).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`cache`] - The `ResultCache` façade: add, remove and enumerate results
//! - [`storage`] - The `KeyValueStore` trait with memory and JSON file backends
//! - [`result`] - Result variants and the tag-dispatched factory
//! - [`types`] - Newtype identifiers
//! - [`config`] - Paths and application settings
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities
//! - [`cli`] - Command-line interface

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod result;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use cache::ResultCache;
pub use error::{CacheError, CliError, ResultError, StorageError};
pub use result::{CuratedResult, ResultFactory, ResultRegistry};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::ResultId;
