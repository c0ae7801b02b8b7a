//! HTTP fetch capability.

use async_trait::async_trait;

/// HTTP method used by a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMethod {
    Get,
    /// Used to unwrap short links without downloading their body.
    Head,
}

/// Per-call fetch options.
///
/// Redirects are always followed, up to the fetcher's configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub method: FetchMethod,
}

impl FetchOptions {
    pub fn get() -> Self {
        Self {
            method: FetchMethod::Get,
        }
    }

    pub fn head() -> Self {
        Self {
            method: FetchMethod::Head,
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::get()
    }
}

/// A successfully fetched response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Response body, possibly truncated. Empty for `HEAD`.
    pub body: String,
    /// URL of the last response after redirects.
    pub final_url: String,
    pub content_type: Option<String>,
}

/// Errors that can occur while fetching a URL.
///
/// None of these reach HTTP clients; the resolver turns them into degraded
/// results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Retrieves URLs over HTTP.
///
/// One network attempt per call, no retry. Implementations bound each call
/// with a timeout and reject non-2xx statuses with [`FetchError::Status`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpFetcher`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] or [`FetchError::UnsupportedScheme`]
    /// before any network activity when `url` is not an absolute HTTP(S) URL.
    /// Network, status, timeout and body errors map to the remaining variants.
    async fn fetch(&self, url: &str, options: FetchOptions) -> Result<FetchedPage, FetchError>;
}
