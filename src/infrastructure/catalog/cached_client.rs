//! Caching decorator for catalog clients.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::ProductQuery;
use crate::domain::providers::{CatalogClient, CatalogError};
use crate::infrastructure::cache::{CacheResult, CacheService};

/// Wraps a [`CatalogClient`] and remembers successful lookups.
///
/// Only successes are cached; failures always reach the inner client on the
/// next request. Cache errors are logged and treated as misses.
pub struct CachedCatalogClient<C: CatalogClient> {
    inner: C,
    cache: Arc<dyn CacheService>,
    namespace: String,
}

impl<C: CatalogClient> CachedCatalogClient<C> {
    /// Creates a caching client. `namespace` separates entries of different
    /// stores sharing one cache, usually the store view code.
    pub fn new(inner: C, cache: Arc<dyn CacheService>, namespace: impl Into<String>) -> Self {
        Self {
            inner,
            cache,
            namespace: namespace.into(),
        }
    }

    fn cache_key(&self, sku: &str, query: ProductQuery) -> String {
        format!("{}:{}:{}", query.operation_name(), self.namespace, sku)
    }

    /// Drops the cached answer for `sku`, so the next lookup reaches the catalog.
    ///
    /// # Errors
    ///
    /// Returns the cache backend's error; unlike lookups, invalidation is not fail-open.
    pub async fn invalidate(&self, sku: &str, query: ProductQuery) -> CacheResult<()> {
        let key = self.cache_key(sku, query);
        self.cache.invalidate(&key).await?;
        debug!("Invalidated {}", key);
        Ok(())
    }
}

#[async_trait]
impl<C: CatalogClient> CatalogClient for CachedCatalogClient<C> {
    async fn fetch_product_url_key_by_sku(
        &self,
        sku: &str,
        query: ProductQuery,
    ) -> Result<String, CatalogError> {
        let key = self.cache_key(sku, query);

        match self.cache.get(&key).await {
            Ok(Some(url_key)) => {
                debug!("Cache HIT for {}", key);
                return Ok(url_key);
            }
            Ok(None) => debug!("Cache MISS for {}", key),
            Err(e) => warn!("Cache error for {}: {}", key, e),
        }

        let url_key = self.inner.fetch_product_url_key_by_sku(sku, query).await?;

        if let Err(e) = self.cache.set(&key, &url_key, None).await {
            warn!("Failed to cache URL key for {}: {}", key, e);
        }

        Ok(url_key)
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }
}
