//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for catalog answers.
///
/// Uses `ConnectionManager` for connection reuse and reconnects. Reads and
/// writes are fail-open: errors are logged and reported as misses. Deletes
/// report [`CacheError::OperationError`].
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "redirect:".to_string(),
        })
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&full_key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();
        let ttl_seconds = ttl.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&full_key, value, ttl_seconds).await {
            Ok(()) => {
                debug!("Cache SET: {} -> {} (TTL: {}s)", key, value, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&full_key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {}", key);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", key, e);
                Err(CacheError::OperationError(format!("DEL {}: {}", full_key, e)))
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
