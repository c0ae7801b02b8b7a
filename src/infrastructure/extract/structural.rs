//! DOM-based extraction using `scraper`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::clean_text;
use crate::domain::capabilities::MetadataExtractor;
use crate::domain::entities::PageMetadata;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[content]").unwrap());
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[rel][href]").unwrap());

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Primary extraction strategy: parses the document into a tree and queries it.
///
/// html5ever recovers from unclosed and misplaced elements, so partial
/// markup still yields whatever tags it contains.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralExtractor;

impl StructuralExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataExtractor for StructuralExtractor {
    fn scan(&self, html: &str) -> PageMetadata {
        let document = Html::parse_document(html);

        // Inline SVG icons carry their own <title>, parsed into the SVG namespace.
        let title = document
            .select(&TITLE_SELECTOR)
            .filter(|el| &*el.value().name.ns == HTML_NAMESPACE)
            .map(|el| clean_text(&el.text().collect::<String>()))
            .find(|text| !text.is_empty())
            .or_else(|| meta_content(&document, "og:title").map(|t| clean_text(&t)));

        let image = meta_content(&document, "og:image").or_else(|| icon_href(&document));

        PageMetadata::new(title, image)
    }
}

/// Returns the first non-blank `content` of a `<meta>` whose `property`
/// (or `name`, as some sites emit) equals `key`.
fn meta_content(document: &Html, key: &str) -> Option<String> {
    document
        .select(&META_SELECTOR)
        .filter(|el| meta_key_matches(el, key))
        .filter_map(|el| el.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

fn meta_key_matches(el: &ElementRef<'_>, key: &str) -> bool {
    ["property", "name"].iter().any(|attr| {
        el.value()
            .attr(attr)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(key))
    })
}

/// Returns the href of the first `<link>` whose `rel` token list contains `icon`.
fn icon_href(document: &Html) -> Option<String> {
    document
        .select(&LINK_SELECTOR)
        .filter(|el| {
            el.value()
                .attr("rel")
                .is_some_and(|rel| rel.split_ascii_whitespace().any(|t| t.eq_ignore_ascii_case("icon")))
        })
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .find(|href| !href.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str) -> PageMetadata {
        StructuralExtractor::new().scan(html)
    }

    #[test]
    fn test_title_and_og_image() {
        let html = r#"<html><head><title>Example</title><meta property="og:image" content="https://example.com/img.png"></head></html>"#;
        let result = StructuralExtractor::new().extract(html, "https://example.com/page");
        assert_eq!(result.title, "Example");
        assert_eq!(result.image, "https://example.com/img.png");
    }

    #[test]
    fn test_title_tag_wins_over_og_title() {
        let html = r#"<head><meta property="og:title" content="Y"><title>X</title></head>"#;
        assert_eq!(scan(html).title.as_deref(), Some("X"));
    }

    #[test]
    fn test_og_title_when_title_missing() {
        let html = r#"<head><meta property="og:title" content="Playa de las Teresitas"></head>"#;
        assert_eq!(scan(html).title.as_deref(), Some("Playa de las Teresitas"));
    }

    #[test]
    fn test_svg_icon_title_is_not_page_title() {
        let html = r#"<head><meta property="og:title" content="Real"></head><body><svg><title>Close icon</title></svg></body>"#;
        assert_eq!(scan(html).title.as_deref(), Some("Real"));
    }

    #[test]
    fn test_og_title_when_title_blank() {
        let html = r#"<head><title>   </title><meta property="og:title" content="Y"></head>"#;
        assert_eq!(scan(html).title.as_deref(), Some("Y"));
    }

    #[test]
    fn test_fallback_url_when_no_title() {
        let result = StructuralExtractor::new().extract("<p>hello</p>", "https://example.com/x");
        assert_eq!(result.title, "https://example.com/x");
        assert_eq!(result.image, "");
    }

    #[test]
    fn test_og_image_wins_over_icon() {
        let html = r#"<head><link rel="icon" href="/W.ico"><meta property="og:image" content="Z"></head>"#;
        assert_eq!(scan(html).image.as_deref(), Some("Z"));
    }

    #[test]
    fn test_icon_when_no_og_image() {
        let html = r#"<head><link rel="stylesheet" href="/s.css"><link rel="shortcut icon" href="/favicon.ico"></head>"#;
        assert_eq!(scan(html).image.as_deref(), Some("/favicon.ico"));
    }

    #[test]
    fn test_apple_touch_icon_is_not_icon() {
        let html = r#"<head><link rel="apple-touch-icon" href="/touch.png"></head>"#;
        assert_eq!(scan(html).image, None);
    }

    #[test]
    fn test_meta_name_variant() {
        let html = r#"<head><meta name="og:image" content="https://cdn.example.com/a.jpg"></head>"#;
        assert_eq!(
            scan(html).image.as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
    }

    #[test]
    fn test_entities_and_whitespace() {
        let html = "<title>\n  Fish &amp; Chips\n  in   Corralejo </title>";
        assert_eq!(scan(html).title.as_deref(), Some("Fish & Chips in Corralejo"));
    }

    #[test]
    fn test_malformed_markup() {
        let html = r#"<html><head><title>Unclosed<meta property="og:image" content="x.png"#;
        let meta = scan(html);
        assert!(meta.title.is_some());
    }

    #[test]
    fn test_empty_document() {
        assert!(scan("").is_empty());
    }
}
