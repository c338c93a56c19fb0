//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::DomainError;
use blog_core::ports::BlogPostStore;
use blog_infra::InMemoryBlogPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostStore>,
}

impl AppState {
    /// Wrap an existing store.
    pub fn with_store(posts: Arc<dyn BlogPostStore>) -> Self {
        Self { posts }
    }

    /// Build the application state, optionally preloaded with demo posts.
    pub async fn new(seed_posts: bool) -> Result<Self, DomainError> {
        let store = if seed_posts {
            InMemoryBlogPostStore::seeded()?
        } else {
            tracing::info!("Seeding disabled - starting with an empty store");
            InMemoryBlogPostStore::new()
        };

        let state = Self::with_store(Arc::new(store));
        tracing::info!(
            posts = state.posts.len().await,
            "Application state initialized"
        );

        Ok(state)
    }
}
