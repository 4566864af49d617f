//! Reconstruction of curated results from stored records.

use super::model::{CuratedResult, Photo, Tweet, Video};
use crate::error::{ResultError, ResultResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Builds a typed result from a parsed record.
pub type Constructor = fn(Value) -> Result<CuratedResult, serde_json::Error>;

/// Trait for turning stored records back into typed results.
///
/// The cache parses a record, pulls out its `resultType` tag and hands both to
/// [`create`](ResultFactory::create); implementations decide which variant the
/// tag maps to.
pub trait ResultFactory {
    /// Build a result of the given type from its parsed record.
    fn create(&self, type_tag: &str, data: Value) -> ResultResult<CuratedResult>;

    /// Parse a stored record string and reconstruct it.
    fn from_record(&self, raw: &str) -> ResultResult<CuratedResult> {
        let data: Value = serde_json::from_str(raw).map_err(ResultError::Parse)?;
        self.from_value(data)
    }

    /// Reconstruct an already-parsed record, dispatching on its `resultType`.
    fn from_value(&self, data: Value) -> ResultResult<CuratedResult> {
        let tag = data
            .get("resultType")
            .and_then(Value::as_str)
            .ok_or(ResultError::MissingType)?
            .to_string();
        self.create(&tag, data)
    }
}

/// Tag-to-constructor registry.
///
/// The default registry knows the built-in `Tweet`, `Photo` and `Video`
/// variants. Further tags can be mapped with [`register`](Self::register),
/// e.g. to accept a legacy tag name for an existing variant.
#[derive(Debug, Clone)]
pub struct ResultRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ResultRegistry {
    /// Create a registry with no known tags.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Map `tag` to `ctor`, replacing any previous mapping.
    pub fn register(&mut self, tag: impl Into<String>, ctor: Constructor) -> &mut Self {
        self.constructors.insert(tag.into(), ctor);
        self
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for ResultRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register(Tweet::TYPE_TAG, variant::<Tweet>)
            .register(Photo::TYPE_TAG, variant::<Photo>)
            .register(Video::TYPE_TAG, variant::<Video>);
        registry
    }
}

impl ResultFactory for ResultRegistry {
    fn create(&self, type_tag: &str, data: Value) -> ResultResult<CuratedResult> {
        let ctor = self
            .constructors
            .get(type_tag)
            .ok_or_else(|| ResultError::UnknownType(type_tag.to_string()))?;

        ctor(data).map_err(|source| ResultError::InvalidRecord {
            result_type: type_tag.to_string(),
            source,
        })
    }
}

fn variant<T>(data: Value) -> Result<CuratedResult, serde_json::Error>
where
    T: DeserializeOwned + Into<CuratedResult>,
{
    serde_json::from_value::<T>(data).map(Into::into)
}
