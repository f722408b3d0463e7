//! # Commerce Redirect
//!
//! Storefront redirect service: turns `/<content>.cifredirect.html/product/<sku>`
//! into a `301 Moved Permanently` to the canonical product page.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Redirect data model and collaborator traits
//! - **Application Layer** ([`application`]) - The redirect resolver
//! - **Infrastructure Layer** ([`infrastructure`]) - GraphQL catalog, cache, content tree, URL builder
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Resolution
//!
//! 1. The suffix must be `/<entityType>/<identifier>`; otherwise 400
//! 2. Only `product` is supported; other entity types get 501
//! 3. The product root page is found by walking the content tree
//! 4. In `URL_KEY` mode the SKU is exchanged for a URL key at the catalog (502 on failure)
//! 5. The URL builder places the identifier according to `PRODUCT_IDENTIFIER_LOCATION`
//!
//! ## Quick Start
//!
//! ```bash
//! export CATALOG_GRAPHQL_URL="https://shop.example.com/graphql"
//! export CONTENT_TREE_PATH="content.json"
//! export PRODUCT_IDENTIFIER_TYPE="URL_KEY"
//!
//! cargo run
//! curl -i http://localhost:3000/content/venia/us/en.cifredirect.html/product/ABC123
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectResolver;
    pub use crate::domain::entities::{
        ContentLocation, IdentifierConfig, IdentifierLocation, IdentifierType, PageRef,
        ProductQuery, ProductUrlParams, RedirectRequest, ResolvedTarget,
    };
    pub use crate::domain::providers::{CatalogClient, CatalogError, PageResolver, UrlBuilder};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
