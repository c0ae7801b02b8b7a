//! Structural extraction with a regex fallback tier.

use tracing::debug;

use super::{PatternExtractor, StructuralExtractor};
use crate::domain::capabilities::MetadataExtractor;
use crate::domain::entities::PageMetadata;

/// Runs [`StructuralExtractor`] first and consults [`PatternExtractor`] only
/// for fields the structural tier left empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredExtractor {
    structural: StructuralExtractor,
    pattern: PatternExtractor,
}

impl LayeredExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetadataExtractor for LayeredExtractor {
    fn scan(&self, html: &str) -> PageMetadata {
        let primary = self.structural.scan(html);
        if primary.is_complete() {
            return primary;
        }

        let fallback = self.pattern.scan(html);
        if !fallback.is_empty() {
            debug!(
                "Pattern tier consulted (title: {}, image: {})",
                primary.title.is_none() && fallback.title.is_some(),
                primary.image.is_none() && fallback.image.is_some()
            );
        }

        primary.or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agrees_with_structural_on_well_formed_input() {
        let html = r#"<html><head><title>Example</title><meta property="og:image" content="https://example.com/img.png"></head></html>"#;
        let layered = LayeredExtractor::new().scan(html);
        assert_eq!(layered, StructuralExtractor::new().scan(html));
        assert_eq!(layered, PatternExtractor::new().scan(html));
    }

    #[test]
    fn test_pattern_tier_fills_gaps() {
        // With scripting enabled, html5ever keeps <noscript> content as raw text.
        let html = r#"<head><title>Card</title><noscript><meta property="og:image" content="https://example.com/n.png"></noscript></head>"#;
        let meta = LayeredExtractor::new().scan(html);
        assert_eq!(meta.title.as_deref(), Some("Card"));
        assert_eq!(meta.image.as_deref(), Some("https://example.com/n.png"));
    }

    #[test]
    fn test_nothing_anywhere() {
        let result = LayeredExtractor::new().extract("<p>no metadata</p>", "https://x.test/");
        assert_eq!(result.title, "https://x.test/");
        assert_eq!(result.image, "");
    }
}
