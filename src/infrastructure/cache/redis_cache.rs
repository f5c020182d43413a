//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, RedirectCache};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for fast redirect lookups.
///
/// Uses `ConnectionManager` for connection reuse. All operations are
/// fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and
    /// configures the default TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING check fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

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

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "url:".to_string(),
        })
    }

    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl RedirectCache for RedisCache {
    async fn get(&self, code: &str) -> CacheResult<Option<String>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(url)) => {
                debug!("Cache HIT: {}", code);
                Ok(Some(url))
            }
            Ok(None) => {
                debug!("Cache MISS: {}", code);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {}: {}", code, e);
                Ok(None)
            }
        }
    }

    async fn put(&self, code: &str, long_url: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&key, long_url, ttl).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", code, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", code, e);
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
