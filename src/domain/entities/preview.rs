//! Preview entities: the link card handed to clients and the partial
//! metadata that extraction tiers produce on the way there.

use serde::{Deserialize, Serialize};

/// A link card describing a URL.
///
/// Always total: `title` is never empty (it falls back to the URL that was
/// resolved) and `image` is the empty string when nothing was discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResult {
    pub title: String,
    pub image: String,
}

impl PreviewResult {
    /// The card used when nothing better is known about `url`.
    pub fn fallback(url: &str) -> Self {
        Self {
            title: url.to_string(),
            image: String::new(),
        }
    }
}

/// Partial metadata found by one extraction tier or one provider payload.
///
/// Blank values are never stored: [`PageMetadata::new`] and the setters
/// normalize them to `None` so that a later tier can fill the gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub image: Option<String>,
}

impl PageMetadata {
    pub fn new(title: Option<String>, image: Option<String>) -> Self {
        Self {
            title: non_blank(title),
            image: non_blank(image),
        }
    }

    /// Returns true if neither a title nor an image was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none()
    }

    /// Returns true if both fields are populated.
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.image.is_some()
    }

    /// Fills fields that are still missing from `other`.
    ///
    /// Fields already present in `self` always win.
    pub fn or(self, other: PageMetadata) -> PageMetadata {
        PageMetadata {
            title: self.title.or(other.title),
            image: self.image.or(other.image),
        }
    }

    /// Folds the metadata into a total card, using `fallback_url` as title
    /// when no title was found.
    pub fn into_preview(self, fallback_url: &str) -> PreviewResult {
        PreviewResult {
            title: self.title.unwrap_or_else(|| fallback_url.to_string()),
            image: self.image.unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Terminal state of a preview resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// Metadata was fetched and extracted (or served from cache).
    Success(PreviewResult),

    /// The upstream could not be reached or read; the card carries the
    /// fallback title. `reason` is for logs only.
    Degraded { result: PreviewResult, reason: String },

    /// The URL is not eligible for this resolver.
    Rejected { message: String },

    /// The caller did not supply a usable URL.
    CallerError { message: String },
}

impl PreviewOutcome {
    /// Returns the card for `Success` and `Degraded` outcomes.
    pub fn preview(&self) -> Option<&PreviewResult> {
        match self {
            Self::Success(result) | Self::Degraded { result, .. } => Some(result),
            Self::Rejected { .. } | Self::CallerError { .. } => None,
        }
    }

    /// Short label used in logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Degraded { .. } => "degraded",
            Self::Rejected { .. } => "rejected",
            Self::CallerError { .. } => "caller_error",
        }
    }
}
