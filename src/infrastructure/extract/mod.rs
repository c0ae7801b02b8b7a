//! HTML metadata extraction strategies.
//!
//! - [`StructuralExtractor`] - DOM parsing via `scraper` (primary)
//! - [`PatternExtractor`] - Regex matching on raw markup (fallback tier)
//! - [`LayeredExtractor`] - Structural first, pattern tier for missing fields
//!
//! The strategy is selected with [`ExtractorMode`] (`EXTRACTOR` env var).

mod layered;
mod pattern;
mod structural;

pub use layered::LayeredExtractor;
pub use pattern::PatternExtractor;
pub use structural::StructuralExtractor;

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::domain::capabilities::MetadataExtractor;

/// Which extraction strategy a scrape source uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractorMode {
    #[default]
    Layered,
    Structural,
    Pattern,
}

impl ExtractorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Layered => "layered",
            Self::Structural => "structural",
            Self::Pattern => "pattern",
        }
    }
}

impl FromStr for ExtractorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "layered" => Ok(Self::Layered),
            "structural" => Ok(Self::Structural),
            "pattern" | "regex" => Ok(Self::Pattern),
            other => Err(format!(
                "unknown extractor '{other}', expected 'layered', 'structural' or 'pattern'"
            )),
        }
    }
}

impl fmt::Display for ExtractorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates the extractor for `mode`.
pub fn build_extractor(mode: ExtractorMode) -> Arc<dyn MetadataExtractor> {
    match mode {
        ExtractorMode::Layered => Arc::new(LayeredExtractor::new()),
        ExtractorMode::Structural => Arc::new(StructuralExtractor::new()),
        ExtractorMode::Pattern => Arc::new(PatternExtractor::new()),
    }
}

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

/// Collapses runs of whitespace to single spaces and trims the ends.
pub(crate) fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes numeric character references and the common named entities.
///
/// Unknown named entities are left as written.
pub(crate) fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    ENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };

            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "laquo" => '\u{ab}',
        "raquo" => '\u{bb}',
        "copy" => '\u{a9}',
        _ => return None,
    };
    Some(c)
}
