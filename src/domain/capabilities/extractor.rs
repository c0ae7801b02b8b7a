//! Metadata extraction capability.

use crate::domain::entities::{PageMetadata, PreviewResult};

/// Extracts a title and preview image from HTML.
///
/// Implementations must never fail: malformed or partial markup simply
/// yields fewer fields.
///
/// # Precedence
///
/// - Title: `<title>` text, then `og:title`
/// - Image: `og:image`, then a `rel="icon"` link
///
/// # Implementations
///
/// - [`crate::infrastructure::extract::StructuralExtractor`] - DOM queries
/// - [`crate::infrastructure::extract::PatternExtractor`] - regex tier
/// - [`crate::infrastructure::extract::LayeredExtractor`] - structural, then regex for gaps
pub trait MetadataExtractor: Send + Sync {
    /// Returns whatever metadata the markup exposes.
    fn scan(&self, html: &str) -> PageMetadata;

    /// Returns a total card, falling back to `fallback_url` for the title.
    fn extract(&self, html: &str, fallback_url: &str) -> PreviewResult {
        self.scan(html).into_preview(fallback_url)
    }
}
