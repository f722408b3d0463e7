//! Catalog lookup contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::ProductQuery;

/// Failures of a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog responded with status {0}")]
    Status(u16),

    #[error("catalog returned errors: {0}")]
    GraphQl(String),

    #[error("invalid catalog response: {0}")]
    Decode(String),

    #[error("product not found: {sku}")]
    ProductNotFound { sku: String },

    #[error("product {sku} has no url key")]
    MissingUrlKey { sku: String },
}

impl CatalogError {
    /// Whether repeating the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(code) => *code >= 500 || *code == 429,
            _ => false,
        }
    }
}

/// Read access to the commerce catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::GraphqlCatalogClient`] - GraphQL endpoint client
/// - [`crate::infrastructure::catalog::CachedCatalogClient`] - Caching decorator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetches the canonical URL key of the product identified by `sku`.
    ///
    /// `query` describes the fields requested from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if the SKU is unknown,
    /// [`CatalogError::MissingUrlKey`] if the product has no URL key, and one of
    /// the transport/decode variants when the catalog cannot be queried.
    async fn fetch_product_url_key_by_sku(
        &self,
        sku: &str,
        query: ProductQuery,
    ) -> Result<String, CatalogError>;

    /// Checks if the catalog endpoint is reachable.
    async fn health_check(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(CatalogError::Transport("connection reset".to_string()).is_transient());
        assert!(CatalogError::Status(503).is_transient());
        assert!(CatalogError::Status(429).is_transient());
        assert!(!CatalogError::Status(400).is_transient());
        assert!(
            !CatalogError::ProductNotFound {
                sku: "ABC123".to_string()
            }
            .is_transient()
        );
        assert!(!CatalogError::GraphQl("syntax error".to_string()).is_transient());
    }
}
