//! Preview cache trait and error types.

use async_trait::async_trait;

use crate::domain::entities::PreviewResult;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved link cards.
///
/// Implementations must be thread-safe. Cache failures never change a
/// resolution outcome; callers log them and carry on as on a miss.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait PreviewCache: Send + Sync {
    /// Retrieves a cached card.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(result))` on cache hit
    /// - `Ok(None)` on cache miss
    async fn get_preview(&self, key: &str) -> CacheResult<Option<PreviewResult>>;

    /// Stores a card with an optional TTL in seconds (implementation default if `None`).
    async fn set_preview(
        &self,
        key: &str,
        preview: &PreviewResult,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
