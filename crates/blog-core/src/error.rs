//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn post_not_found(id: Uuid) -> Self {
        DomainError::NotFound {
            entity_type: "BlogPost",
            id,
        }
    }
}
