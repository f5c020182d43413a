//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, RedirectCache};
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Every lookup is a miss and every write succeeds immediately. Used when
/// Redis is not configured, fails at startup, or tests want the database
/// path exercised directly.
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
impl RedirectCache for NullCache {
    async fn get(&self, _code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn put(
        &self,
        _code: &str,
        _long_url: &str,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
