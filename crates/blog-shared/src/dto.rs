//! Data Transfer Objects - request types for the blog posts API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A `publishDate` as clients send it: epoch milliseconds (what
/// `Date.now()` yields) or an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublishDate {
    Millis(i64),
    Rfc3339(DateTime<Utc>),
}

impl PublishDate {
    /// `None` when the millisecond count is outside chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        match self {
            PublishDate::Millis(ms) => DateTime::from_timestamp_millis(ms),
            PublishDate::Rfc3339(dt) => Some(dt),
        }
    }
}

/// Request to create a blog post.
///
/// Text fields are optional on the wire so that missing ones can be reported
/// by name instead of as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<PublishDate>,
}

/// Request to replace a blog post. `id` must match the id in the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<PublishDate>,
}
