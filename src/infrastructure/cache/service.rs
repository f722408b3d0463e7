//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// String key/value cache used to remember catalog answers.
///
/// Implementations must be thread-safe. A cache failure must never fail a
/// redirect: callers treat errors as misses and fall through to the catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached value.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `key` - Cache key
    /// - `value` - Value to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes a cached value.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reports, e.g. `redis`.
    fn backend(&self) -> &'static str;
}
