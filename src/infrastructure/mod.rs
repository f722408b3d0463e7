//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`catalog`] - GraphQL catalog client and its caching decorator
//! - [`content`] - Content tree loaded from JSON and the page resolver on top of it
//! - [`urls`] - Template-based product URL builder

pub mod cache;
pub mod catalog;
pub mod content;
pub mod urls;
