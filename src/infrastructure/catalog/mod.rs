//! Catalog access.
//!
//! - [`GraphqlCatalogClient`] - Queries a commerce GraphQL endpoint
//! - [`CachedCatalogClient`] - Remembers URL keys in a [`crate::infrastructure::cache::CacheService`]

mod cached_client;
mod graphql_client;

pub use cached_client::CachedCatalogClient;
pub use graphql_client::{GraphqlCatalogClient, GraphqlCatalogConfig};
