use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// BlogPost entity - a single article in the collection.
///
/// Serialized with camelCase keys; `publishDate` travels as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub publish_date: DateTime<Utc>,
}

/// Fields accepted when creating a post.
#[derive(Debug, Clone, Default)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: Option<DateTime<Utc>>,
}

/// Full replacement of a stored post, keyed by `id`.
#[derive(Debug, Clone)]
pub struct BlogPostUpdate {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Keeps the stored date when absent.
    pub publish_date: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Build a post from validated input, assigning a fresh id and defaulting
    /// the publish date to now.
    pub fn create(input: NewBlogPost) -> Result<Self, DomainError> {
        require_fields(&input.title, &input.content, &input.author)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            author: input.author,
            publish_date: input.publish_date.unwrap_or_else(Utc::now).trunc_subsecs(3),
        })
    }

    /// Overwrite every field supplied by `update`. The id never changes.
    pub fn apply(&mut self, update: BlogPostUpdate) {
        self.title = update.title;
        self.content = update.content;
        self.author = update.author;
        if let Some(publish_date) = update.publish_date {
            self.publish_date = publish_date.trunc_subsecs(3);
        }
    }
}

impl NewBlogPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            publish_date: None,
        }
    }

    pub fn with_publish_date(mut self, publish_date: DateTime<Utc>) -> Self {
        self.publish_date = Some(publish_date);
        self
    }
}

impl BlogPostUpdate {
    /// Check the update against the id taken from the request path.
    pub fn validate_for(&self, path_id: Uuid) -> Result<(), DomainError> {
        if self.id != path_id {
            return Err(DomainError::Validation(format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id, self.id
            )));
        }

        require_fields(&self.title, &self.content, &self.author)
    }
}

fn require_fields(title: &str, content: &str, author: &str) -> Result<(), DomainError> {
    let missing: Vec<String> = [("title", title), ("content", content), ("author", author)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| format!("`{}`", name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "Missing {} in request body",
            missing.join(", ")
        )))
    }
}
