//! Regex-based extraction over raw markup.

use std::sync::LazyLock;

use regex::Regex;

use super::{clean_text, decode_entities};
use crate::domain::capabilities::MetadataExtractor;
use crate::domain::entities::PageMetadata;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").unwrap());

/// Inline SVG blocks, whose `<title>` labels a graphic rather than the page.
static SVG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<svg\b.*?</svg\s*>").unwrap());

/// Matches `<meta ...>` and `<link ...>` tags, capturing the tag name and
/// the raw attribute text.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(meta|link)\b([^>]*)>").unwrap());

/// Matches one `name=value` attribute with double, single or no quotes.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
        .unwrap()
});

/// Fallback extraction strategy.
///
/// Tolerates attribute order and quoting style by parsing each tag's
/// attributes separately, but knows nothing about document structure
/// (comments, scripts and CDATA are scanned like any other text).
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataExtractor for PatternExtractor {
    fn scan(&self, html: &str) -> PageMetadata {
        let mut og_title = None;
        let mut og_image = None;
        let mut icon = None;

        for tag in TAG_RE.captures_iter(html) {
            let attrs = parse_attributes(&tag[2]);

            if tag[1].eq_ignore_ascii_case("meta") {
                let key = attr(&attrs, "property").or_else(|| attr(&attrs, "name"));
                let content = attr(&attrs, "content").filter(|c| !c.trim().is_empty());
                let (Some(key), Some(content)) = (key.map(str::trim), content) else {
                    continue;
                };

                if og_title.is_none() && key.eq_ignore_ascii_case("og:title") {
                    og_title = Some(clean_text(content));
                } else if og_image.is_none() && key.eq_ignore_ascii_case("og:image") {
                    og_image = Some(content.trim().to_string());
                }
            } else if icon.is_none() {
                let is_icon = attr(&attrs, "rel").is_some_and(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|t| t.eq_ignore_ascii_case("icon"))
                });
                if is_icon {
                    icon = attr(&attrs, "href")
                        .map(str::trim)
                        .filter(|h| !h.is_empty())
                        .map(str::to_string);
                }
            }
        }

        let without_svg = SVG_RE.replace_all(html, "");
        let title = TITLE_RE
            .captures_iter(&without_svg)
            .map(|cap| clean_text(&decode_entities(&cap[1])))
            .find(|t| !t.is_empty())
            .or(og_title);

        PageMetadata::new(title, og_image.or(icon))
    }
}

/// Splits a tag's attribute text into `(lowercase name, decoded value)` pairs.
fn parse_attributes(raw: &str) -> Vec<(String, String)> {
    ATTR_RE
        .captures_iter(raw)
        .map(|cap| {
            let value = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map_or("", |m| m.as_str());
            (cap[1].to_ascii_lowercase(), decode_entities(value))
        })
        .collect()
}

fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}
