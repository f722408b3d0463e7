//! Domain layer: redirect data model and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Request, identifier configuration, page and URL value types
//! - [`providers`] - Traits for the external collaborators the resolver consumes
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Provider traits define contracts implemented by the infrastructure layer
//! - Resolution logic lives in [`crate::application::services::RedirectResolver`]

pub mod entities;
pub mod providers;
