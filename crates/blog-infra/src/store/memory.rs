//! In-memory blog post store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{BlogPost, BlogPostUpdate, NewBlogPost};
use blog_core::ports::BlogPostStore;

use crate::seed;

/// In-memory store keeping posts in insertion order behind an async RwLock.
///
/// Every mutation holds the write lock for its whole duration, so two
/// mutations never interleave. Data is lost on process restart.
pub struct InMemoryBlogPostStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Build a store preloaded with `inputs`, in order.
    pub fn with_posts(inputs: impl IntoIterator<Item = NewBlogPost>) -> Result<Self, DomainError> {
        let posts = inputs
            .into_iter()
            .map(BlogPost::create)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            posts: RwLock::new(posts),
        })
    }

    /// Build a store preloaded with the demo posts.
    pub fn seeded() -> Result<Self, DomainError> {
        Self::with_posts(seed::demo_posts())
    }

    fn position(posts: &[BlogPost], id: Uuid) -> Result<usize, DomainError> {
        posts
            .iter()
            .position(|post| post.id == id)
            .ok_or_else(|| DomainError::post_not_found(id))
    }
}

impl Default for InMemoryBlogPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostStore for InMemoryBlogPostStore {
    async fn list(&self) -> Vec<BlogPost> {
        self.posts.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        let posts = self.posts.read().await;
        let index = Self::position(&posts, id)?;
        Ok(posts[index].clone())
    }

    async fn create(&self, input: NewBlogPost) -> Result<BlogPost, DomainError> {
        let post = BlogPost::create(input)?;

        let mut posts = self.posts.write().await;
        posts.push(post.clone());

        tracing::debug!(post_id = %post.id, total = posts.len(), "Blog post created");
        Ok(post)
    }

    async fn update(&self, id: Uuid, update: BlogPostUpdate) -> Result<BlogPost, DomainError> {
        update.validate_for(id)?;

        let mut posts = self.posts.write().await;
        let index = Self::position(&posts, id)?;
        let post = &mut posts[index];
        post.apply(update);

        tracing::debug!(post_id = %id, "Blog post updated");
        Ok(post.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<(), DomainError> {
        let mut posts = self.posts.write().await;
        let index = Self::position(&posts, id)?;
        posts.remove(index);

        tracing::debug!(post_id = %id, total = posts.len(), "Blog post deleted");
        Ok(())
    }

    async fn len(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn full_update(id: Uuid, title: &str) -> BlogPostUpdate {
        BlogPostUpdate {
            id,
            title: title.to_string(),
            content: "Updated content".to_string(),
            author: "SS".to_string(),
            publish_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let store = InMemoryBlogPostStore::new();
        let mut ids = HashSet::new();

        for i in 0..50 {
            let post = store
                .create(NewBlogPost::new(format!("Post {i}"), "Body", "SS"))
                .await
                .unwrap();
            assert!(ids.insert(post.id));
        }

        assert_eq!(store.len().await, 50);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryBlogPostStore::new();
        assert!(store.list().await.is_empty());

        let first = store.create(NewBlogPost::new("First", "1", "SS")).await.unwrap();
        let second = store.create(NewBlogPost::new("Second", "2", "SS")).await.unwrap();

        assert_eq!(store.list().await, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = InMemoryBlogPostStore::new();
        let created = store
            .create(NewBlogPost::new("next new blog post", "This is my next blog", "SS"))
            .await
            .unwrap();

        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_with_missing_field_leaves_store_unchanged() {
        let store = InMemoryBlogPostStore::new();
        let err = store
            .create(NewBlogPost::new("", "x", "y"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("`title`")));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_in_place() {
        let store = InMemoryBlogPostStore::seeded().unwrap();
        let target = store.list().await[1].clone();

        let updated = store
            .update(target.id, full_update(target.id, "Updated blog post."))
            .await
            .unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.title, "Updated blog post.");
        assert_eq!(store.list().await[1], updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_and_changes_nothing() {
        let store = InMemoryBlogPostStore::seeded().unwrap();
        let before = store.list().await;
        let id = Uuid::new_v4();

        let err = store.update(id, full_update(id, "Nope")).await.unwrap_err();

        assert_eq!(err, DomainError::post_not_found(id));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_update_with_mismatched_id_is_rejected() {
        let store = InMemoryBlogPostStore::seeded().unwrap();
        let target = store.list().await[0].clone();

        let err = store
            .update(target.id, full_update(Uuid::new_v4(), "Other"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.get(target.id).await.unwrap(), target);
    }

    #[tokio::test]
    async fn test_update_with_blank_title_is_rejected() {
        let store = InMemoryBlogPostStore::seeded().unwrap();
        let before = store.list().await;
        let target = before[0].id;

        let err = store
            .update(target, full_update(target, "   "))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("`title`")));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_remove_then_get_is_not_found() {
        let store = InMemoryBlogPostStore::seeded().unwrap();
        let target = store.list().await[0].clone();

        store.remove(target.id).await.unwrap();

        assert_eq!(
            store.get(target.id).await.unwrap_err(),
            DomainError::post_not_found(target.id)
        );
        assert_eq!(store.len().await, 2);
        assert_eq!(
            store.remove(target.id).await.unwrap_err(),
            DomainError::post_not_found(target.id)
        );
    }

    #[tokio::test]
    async fn test_seeded_store_has_demo_posts() {
        let store = InMemoryBlogPostStore::seeded().unwrap();
        assert_eq!(store.len().await, seed::demo_posts().len());
    }
}
