//! Configuration management for Curator.
//!
//! Provides XDG-compliant paths and application settings.

mod settings;

pub use settings::{AppSettings, Paths, DEFAULT_QUOTA_BYTES};
