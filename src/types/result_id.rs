//! Identifiers for curated results.
//!
//! `ResultId` wraps the identifier a result source assigned to a hit (a tweet
//! ID, a photo ID, ...). It is opaque to Curator apart from being non-empty.

use crate::error::ResultError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-empty identifier for a curated result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResultId(String);

impl ResultId {
    /// Create a result ID, rejecting empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, ResultError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ResultError::InvalidId("result ID cannot be empty".to_string()));
        }
        Ok(Self(id))
    }

    /// Borrow the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ResultId {
    type Err = ResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ResultId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ResultId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_id_rejects_empty() {
        assert!(ResultId::new("").is_err());
        assert!("".parse::<ResultId>().is_err());
    }

    #[test]
    fn test_result_id_display() {
        let id = ResultId::new("12345").unwrap();
        assert_eq!(id.to_string(), "12345");
        assert_eq!(id.as_str(), "12345");
    }

    #[test]
    fn test_result_id_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<ResultId>("\"\"").is_err());
        let id: ResultId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id.as_str(), "abc");
    }
}
