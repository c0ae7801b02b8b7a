//! Preview resolution service.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::capabilities::{PreviewSource, UrlClassifier};
use crate::domain::entities::{PreviewOutcome, PreviewResult};
use crate::infrastructure::cache::PreviewCache;

/// Message returned when the caller supplies no usable URL.
pub const MISSING_URL: &str = "Missing URL";

/// One configuration of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
    /// Scrapes the page itself; accepts any http(s) URL.
    Generic,
    /// Classifies the URL as a map link, then asks the provider's oEmbed endpoint.
    Maps,
    /// Asks the oEmbed endpoint directly, without classification.
    MapsOEmbed,
}

impl ResolverKind {
    pub const ALL: [ResolverKind; 3] = [Self::Generic, Self::Maps, Self::MapsOEmbed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Maps => "maps",
            Self::MapsOEmbed => "maps-oembed",
        }
    }

    /// Cache key for `url` under this resolver.
    pub fn cache_key(&self, url: &str) -> String {
        format!("{}:{}", self.as_str(), url)
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "maps" => Ok(Self::Maps),
            "maps-oembed" | "maps_oembed" => Ok(Self::MapsOEmbed),
            other => Err(format!(
                "unknown resolver kind '{}' (expected generic, maps or maps-oembed)",
                other
            )),
        }
    }
}

/// Resolves a raw URL into a [`PreviewOutcome`].
///
/// Assembled from an optional [`UrlClassifier`] and a [`PreviewSource`].
/// Resolution is a linear pipeline:
///
/// 1. trim the input, reject blank input with [`PreviewOutcome::CallerError`]
/// 2. serve a cached card if one exists
/// 3. classify (when a classifier is configured) and reject ineligible URLs
/// 4. look up metadata for the canonical URL
/// 5. fold the metadata into a card, falling back to the URL as title
///
/// Transport failures never escape: they become [`PreviewOutcome::Degraded`].
pub struct PreviewService {
    kind: ResolverKind,
    classifier: Option<Arc<dyn UrlClassifier>>,
    source: Arc<dyn PreviewSource>,
    cache: Arc<dyn PreviewCache>,
    cache_ttl: Option<u64>,
}

impl PreviewService {
    pub fn new(
        kind: ResolverKind,
        classifier: Option<Arc<dyn UrlClassifier>>,
        source: Arc<dyn PreviewSource>,
        cache: Arc<dyn PreviewCache>,
    ) -> Self {
        Self {
            kind,
            classifier,
            source,
            cache,
            cache_ttl: None,
        }
    }

    /// Overrides the cache backend's default TTL for cards stored by this service.
    pub fn with_cache_ttl(mut self, ttl_seconds: u64) -> Self {
        self.cache_ttl = Some(ttl_seconds);
        self
    }

    pub fn kind(&self) -> ResolverKind {
        self.kind
    }

    pub async fn resolve(&self, raw_url: &str) -> PreviewOutcome {
        let url = raw_url.trim();
        if url.is_empty() {
            return PreviewOutcome::CallerError {
                message: MISSING_URL.to_string(),
            };
        }

        let cache_key = self.kind.cache_key(url);
        match self.cache.get_preview(&cache_key).await {
            Ok(Some(cached)) => {
                debug!(kind = %self.kind, url, "Serving preview from cache");
                return PreviewOutcome::Success(cached);
            }
            Ok(None) => {}
            Err(e) => warn!(kind = %self.kind, url, "Cache lookup failed: {}", e),
        }

        let target = match &self.classifier {
            Some(classifier) => {
                let classification = classifier.classify(url).await;
                if !classification.eligible {
                    debug!(
                        kind = %self.kind,
                        url,
                        canonical = %classification.canonical_url,
                        "URL rejected by classifier"
                    );
                    return PreviewOutcome::Rejected {
                        message: classifier.rejection_message(),
                    };
                }
                classification.canonical_url
            }
            None => url.to_string(),
        };

        let metadata = match self.source.lookup(&target).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(kind = %self.kind, url = %target, "Preview degraded: {}", e);
                return PreviewOutcome::Degraded {
                    result: PreviewResult::fallback(&target),
                    reason: e.to_string(),
                };
            }
        };

        let preview = metadata.into_preview(&target);

        if let Err(e) = self
            .cache
            .set_preview(&cache_key, &preview, self.cache_ttl)
            .await
        {
            warn!(kind = %self.kind, url, "Failed to cache preview: {}", e);
        }

        PreviewOutcome::Success(preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capabilities::{FetchError, MockPreviewSource, MockUrlClassifier};
    use crate::domain::entities::{Classification, PageMetadata};
    use crate::infrastructure::cache::{CacheError, CacheResult, NullCache};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, PreviewResult>>,
    }

    #[async_trait]
    impl PreviewCache for MemoryCache {
        async fn get_preview(&self, key: &str) -> CacheResult<Option<PreviewResult>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_preview(
            &self,
            key: &str,
            preview: &PreviewResult,
            _ttl_seconds: Option<u64>,
        ) -> CacheResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), preview.clone());
            Ok(())
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn backend(&self) -> &'static str {
            "memory"
        }
    }

    struct BrokenCache;

    #[async_trait]
    impl PreviewCache for BrokenCache {
        async fn get_preview(&self, _key: &str) -> CacheResult<Option<PreviewResult>> {
            Err(CacheError::OperationError("down".to_string()))
        }

        async fn set_preview(
            &self,
            _key: &str,
            _preview: &PreviewResult,
            _ttl_seconds: Option<u64>,
        ) -> CacheResult<()> {
            Err(CacheError::OperationError("down".to_string()))
        }

        async fn health_check(&self) -> bool {
            false
        }

        fn backend(&self) -> &'static str {
            "broken"
        }
    }

    fn metadata(title: &str, image: &str) -> PageMetadata {
        PageMetadata::new(Some(title.to_string()), Some(image.to_string()))
    }

    fn generic(source: MockPreviewSource) -> PreviewService {
        PreviewService::new(
            ResolverKind::Generic,
            None,
            Arc::new(source),
            Arc::new(NullCache::new()),
        )
    }

    #[test]
    fn test_resolver_kind_parsing() {
        assert_eq!("maps".parse::<ResolverKind>().unwrap(), ResolverKind::Maps);
        assert_eq!(
            "Maps-OEmbed".parse::<ResolverKind>().unwrap(),
            ResolverKind::MapsOEmbed
        );
        assert!("places".parse::<ResolverKind>().is_err());
        assert_eq!(ResolverKind::MapsOEmbed.to_string(), "maps-oembed");
    }

    #[tokio::test]
    async fn test_blank_url_is_caller_error_without_lookup() {
        let mut source = MockPreviewSource::new();
        source.expect_lookup().times(0);
        let service = generic(source);

        for raw in ["", "   ", "\n\t"] {
            assert_eq!(
                service.resolve(raw).await,
                PreviewOutcome::CallerError {
                    message: "Missing URL".to_string()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_success_folds_metadata() {
        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .withf(|url| url == "https://example.com/page")
            .times(1)
            .returning(|_| Ok(metadata("Example", "https://example.com/img.png")));

        let outcome = generic(source).resolve("  https://example.com/page ").await;

        assert_eq!(
            outcome,
            PreviewOutcome::Success(PreviewResult {
                title: "Example".to_string(),
                image: "https://example.com/img.png".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_missing_title_falls_back_to_url() {
        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .returning(|_| Ok(PageMetadata::default()));

        let outcome = generic(source).resolve("https://example.com/bare").await;

        assert_eq!(
            outcome,
            PreviewOutcome::Success(PreviewResult::fallback("https://example.com/bare"))
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_degrades() {
        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .returning(|_| Err(FetchError::Timeout));

        let outcome = generic(source).resolve("https://slow.example").await;

        match outcome {
            PreviewOutcome::Degraded { result, reason } => {
                assert_eq!(result, PreviewResult::fallback("https://slow.example"));
                assert!(reason.contains("timed out"));
            }
            other => panic!("expected degraded outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ineligible_url_is_rejected_without_lookup() {
        let mut classifier = MockUrlClassifier::new();
        classifier
            .expect_classify()
            .returning(|url| Classification::ineligible(url));
        classifier
            .expect_rejection_message()
            .returning(|| "Not a valid Google Maps URL".to_string());

        let mut source = MockPreviewSource::new();
        source.expect_lookup().times(0);

        let service = PreviewService::new(
            ResolverKind::Maps,
            Some(Arc::new(classifier)),
            Arc::new(source),
            Arc::new(NullCache::new()),
        );

        assert_eq!(
            service.resolve("https://example.com").await,
            PreviewOutcome::Rejected {
                message: "Not a valid Google Maps URL".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_eligible_url_resolves_canonical_target() {
        let mut classifier = MockUrlClassifier::new();
        classifier
            .expect_classify()
            .returning(|_| Classification::eligible("https://www.google.com/maps/place/Teide"));

        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .withf(|url| url == "https://www.google.com/maps/place/Teide")
            .times(1)
            .returning(|_| Err(FetchError::Status(404)));

        let service = PreviewService::new(
            ResolverKind::Maps,
            Some(Arc::new(classifier)),
            Arc::new(source),
            Arc::new(NullCache::new()),
        );

        let outcome = service.resolve("https://maps.app.goo.gl/abc").await;
        assert_eq!(
            outcome.preview(),
            Some(&PreviewResult::fallback(
                "https://www.google.com/maps/place/Teide"
            ))
        );
    }

    #[tokio::test]
    async fn test_success_is_cached_and_served_without_lookup() {
        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .times(1)
            .returning(|_| Ok(metadata("Cached", "")));

        let service = PreviewService::new(
            ResolverKind::Generic,
            None,
            Arc::new(source),
            Arc::new(MemoryCache::default()),
        );

        let first = service.resolve("https://example.com").await;
        let second = service.resolve("https://example.com").await;

        assert_eq!(first, second);
        assert_eq!(second.preview().map(|p| p.title.as_str()), Some("Cached"));
    }

    #[tokio::test]
    async fn test_degraded_outcome_is_not_cached() {
        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .times(2)
            .returning(|_| Err(FetchError::Transport("refused".to_string())));

        let service = PreviewService::new(
            ResolverKind::Generic,
            None,
            Arc::new(source),
            Arc::new(MemoryCache::default()),
        );

        assert_eq!(service.resolve("https://down.example").await.label(), "degraded");
        assert_eq!(service.resolve("https://down.example").await.label(), "degraded");
    }

    #[tokio::test]
    async fn test_cache_failure_does_not_change_outcome() {
        let mut source = MockPreviewSource::new();
        source
            .expect_lookup()
            .returning(|_| Ok(metadata("Still works", "")));

        let service = PreviewService::new(
            ResolverKind::Generic,
            None,
            Arc::new(source),
            Arc::new(BrokenCache),
        );

        let outcome = service.resolve("https://example.com").await;
        assert_eq!(outcome.label(), "success");
    }
}
