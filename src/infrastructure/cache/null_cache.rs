//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is not configured or unreachable at startup. Every lookup
/// is a miss, so every URL-key redirect goes to the catalog.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "none"
    }
}
