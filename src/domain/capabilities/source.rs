//! Preview source capability: the fetch + extract half of a resolver.

use async_trait::async_trait;

use crate::domain::capabilities::FetchError;
use crate::domain::entities::PageMetadata;

/// Looks up metadata for a URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::sources::ScrapeSource`] - fetches the page and runs an extractor
/// - [`crate::infrastructure::sources::OEmbedSource`] - queries a provider oEmbed endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreviewSource: Send + Sync {
    /// Returns the metadata found for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the upstream could not be reached or read.
    /// Missing tags or fields are not errors; they leave gaps in the result.
    async fn lookup(&self, url: &str) -> Result<PageMetadata, FetchError>;
}
