//! Result of checking a URL against a provider-specific resolver.

/// Whether a URL may be resolved by a provider-specific resolver, and the
/// URL it should be resolved as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub eligible: bool,
    /// The URL after redirect resolution, or the input when resolution
    /// failed.
    pub canonical_url: String,
}

impl Classification {
    pub fn eligible(canonical_url: impl Into<String>) -> Self {
        Self {
            eligible: true,
            canonical_url: canonical_url.into(),
        }
    }

    pub fn ineligible(canonical_url: impl Into<String>) -> Self {
        Self {
            eligible: false,
            canonical_url: canonical_url.into(),
        }
    }
}
