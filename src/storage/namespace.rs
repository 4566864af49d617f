//! Prefix-scoped key namespaces.
//!
//! A shared store is one flat key space. Each subsystem claims keys by a
//! fixed prefix and must never touch keys outside it.

/// Prefix that marks curated result keys.
pub const CURATED_PREFIX: &str = "curated_";

/// A prefix-scoped slice of a shared key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    prefix: &'static str,
}

impl Namespace {
    /// Create a namespace for keys starting with `prefix`.
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// The namespace curated results are stored in.
    pub const fn curated() -> Self {
        Self::new(CURATED_PREFIX)
    }

    /// Build the full key for `suffix`.
    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }

    /// Whether `key` belongs to this namespace.
    pub fn contains(&self, key: &str) -> bool {
        key.starts_with(self.prefix)
    }

    /// The part of `key` after the prefix, if it belongs to this namespace.
    pub fn strip<'k>(&self, key: &'k str) -> Option<&'k str> {
        key.strip_prefix(self.prefix)
    }
}
