use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostUpdate, NewBlogPost};
use crate::error::DomainError;

/// Blog post store - the collection of posts owned by a running server.
///
/// Implementations must apply each mutation atomically: a call that returns
/// an error leaves the collection unchanged.
#[async_trait]
pub trait BlogPostStore: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> Vec<BlogPost>;

    /// Find a post by its id.
    async fn get(&self, id: Uuid) -> Result<BlogPost, DomainError>;

    /// Validate and append a new post, returning it with its assigned id.
    async fn create(&self, input: NewBlogPost) -> Result<BlogPost, DomainError>;

    /// Replace the post stored under `id` with the supplied fields.
    async fn update(&self, id: Uuid, update: BlogPostUpdate) -> Result<BlogPost, DomainError>;

    /// Delete the post stored under `id`.
    async fn remove(&self, id: Uuid) -> Result<(), DomainError>;

    /// Number of live posts.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
