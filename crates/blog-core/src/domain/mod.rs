//! Domain entities - the core business objects.

mod post;

pub use post::{BlogPost, BlogPostUpdate, NewBlogPost};
