//! Redirect cache trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache for resolved code-to-URL mappings on the redirect path.
///
/// Implementations are fail-open: a cache error degrades to a database
/// lookup and must never fail the redirect itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait RedirectCache: Send + Sync {
    /// Retrieves the original URL for a short code.
    ///
    /// Returns `Ok(None)` on a miss; implementations treat backend errors
    /// as misses rather than propagating them.
    async fn get(&self, code: &str) -> CacheResult<Option<String>>;

    /// Stores a code-to-URL mapping with an optional TTL override.
    ///
    /// Implementations log backend errors and return `Ok(())` so a failed
    /// write never disturbs the request that triggered it.
    async fn put(&self, code: &str, long_url: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Reports whether the cache backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
