//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, PreviewCache};
use crate::domain::entities::PreviewResult;
use async_trait::async_trait;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is not configured, when the Redis connection fails at
/// startup, by the CLI and in tests. Every lookup is a miss.
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
impl PreviewCache for NullCache {
    async fn get_preview(&self, _key: &str) -> CacheResult<Option<PreviewResult>> {
        Ok(None)
    }

    async fn set_preview(
        &self,
        _key: &str,
        _preview: &PreviewResult,
        _ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();
        let preview = PreviewResult::fallback("https://example.com");

        cache.set_preview("generic:https://example.com", &preview, None).await.unwrap();

        assert_eq!(cache.get_preview("generic:https://example.com").await.unwrap(), None);
        assert!(cache.health_check().await);
    }
}
