//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! This crate contains the blog post entity, its validation rules and the
//! store port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
