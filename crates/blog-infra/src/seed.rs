//! Demo posts loaded when the server starts with seeding enabled.

use blog_core::domain::NewBlogPost;

/// Three sample posts so a fresh server has something to list.
pub fn demo_posts() -> Vec<NewBlogPost> {
    vec![
        NewBlogPost::new(
            "Ten things you won't believe about Rust",
            "Ownership, borrowing and lifetimes make memory safety a compile-time property.",
            "Billy Bob",
        ),
        NewBlogPost::new(
            "An ode to the in-memory store",
            "Fast, simple and gone the moment the process exits.",
            "Jane Doe",
        ),
        NewBlogPost::new(
            "Writing REST APIs with actix-web",
            "Scopes, extractors and responders are all you need for a small CRUD service.",
            "SS",
        ),
    ]
}
