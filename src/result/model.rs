//! Concrete curated result variants.

use crate::error::{ResultError, ResultResult};
use crate::types::ResultId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A curated result.
///
/// Serializes as a flat JSON object carrying a `resultType` tag alongside the
/// variant's own fields, e.g. `{"resultType":"Photo","resultId":"1",...}`.
/// Reconstruction from that form goes through a
/// [`ResultFactory`](super::ResultFactory) so the tag dispatch stays pluggable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "resultType")]
pub enum CuratedResult {
    Tweet(Tweet),
    Photo(Photo),
    Video(Video),
}

impl CuratedResult {
    /// The identifier this result is stored under.
    pub fn result_id(&self) -> &ResultId {
        match self {
            Self::Tweet(t) => &t.result_id,
            Self::Photo(p) => &p.result_id,
            Self::Video(v) => &v.result_id,
        }
    }

    /// The `resultType` tag written into the stored record.
    pub fn result_type(&self) -> &'static str {
        match self {
            Self::Tweet(_) => Tweet::TYPE_TAG,
            Self::Photo(_) => Photo::TYPE_TAG,
            Self::Video(_) => Video::TYPE_TAG,
        }
    }

    /// Author handle or display name.
    pub fn author(&self) -> &str {
        match self {
            Self::Tweet(t) => &t.author,
            Self::Photo(p) => &p.author,
            Self::Video(v) => &v.author,
        }
    }

    /// Link back to the original item, if known.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Tweet(t) => t.url.as_deref(),
            Self::Photo(p) => p.url.as_deref(),
            Self::Video(v) => v.url.as_deref(),
        }
    }

    /// When the original item was posted, if known.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Tweet(t) => t.posted_at,
            Self::Photo(p) => p.posted_at,
            Self::Video(v) => v.posted_at,
        }
    }

    /// Short human-readable description (tweet text or media title).
    pub fn summary(&self) -> &str {
        match self {
            Self::Tweet(t) => &t.text,
            Self::Photo(p) => p.title.as_deref().unwrap_or(""),
            Self::Video(v) => v.title.as_deref().unwrap_or(""),
        }
    }

    /// Look up a field of the stored record by its serialized name.
    ///
    /// Returns `None` for fields the variant does not carry.
    pub fn get(&self, field: &str) -> Option<Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map.remove(field),
            _ => None,
        }
    }

    /// Encode this result as its stored record string.
    pub fn to_record(&self) -> ResultResult<String> {
        serde_json::to_string(self).map_err(ResultError::Serialize)
    }
}

impl fmt::Display for CuratedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} by {}", self.result_type(), self.result_id(), self.author())
    }
}

impl From<Tweet> for CuratedResult {
    fn from(t: Tweet) -> Self {
        Self::Tweet(t)
    }
}

impl From<Photo> for CuratedResult {
    fn from(p: Photo) -> Self {
        Self::Photo(p)
    }
}

impl From<Video> for CuratedResult {
    fn from(v: Video) -> Self {
        Self::Video(v)
    }
}

/// A short text post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    pub result_id: ResultId,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub text: String,
}

impl Tweet {
    pub const TYPE_TAG: &'static str = "Tweet";

    /// Create a tweet result.
    pub fn new(result_id: ResultId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            result_id,
            author: author.into(),
            url: None,
            posted_at: None,
            text: text.into(),
        }
    }

    /// Set the source link.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the posting time.
    pub fn with_posted_at(mut self, at: DateTime<Utc>) -> Self {
        self.posted_at = Some(at);
        self
    }
}

/// A photo hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub result_id: ResultId,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Photo {
    pub const TYPE_TAG: &'static str = "Photo";

    /// Create a photo result.
    pub fn new(result_id: ResultId, author: impl Into<String>) -> Self {
        Self {
            result_id,
            author: author.into(),
            url: None,
            posted_at: None,
            title: None,
            thumbnail_url: None,
        }
    }

    /// Set the photo title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the thumbnail link.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }
}

/// A video hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub result_id: ResultId,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u64>,
}

impl Video {
    pub const TYPE_TAG: &'static str = "Video";

    /// Create a video result.
    pub fn new(result_id: ResultId, author: impl Into<String>) -> Self {
        Self {
            result_id,
            author: author.into(),
            url: None,
            posted_at: None,
            title: None,
            duration_secs: None,
        }
    }

    /// Set the video title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the running time.
    pub fn with_duration(mut self, secs: u64) -> Self {
        self.duration_secs = Some(secs);
        self
    }
}
