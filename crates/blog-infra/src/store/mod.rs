//! Blog post store implementations.

mod memory;

pub use memory::InMemoryBlogPostStore;
