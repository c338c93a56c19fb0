//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Posts are kept in process memory and are lost when the server stops.

pub mod seed;
pub mod store;

pub use store::InMemoryBlogPostStore;
