//! Preview source backed by a provider's oEmbed endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::capabilities::{FetchError, FetchOptions, Fetcher, PreviewSource};
use crate::domain::entities::PageMetadata;
use crate::utils::http_url::{UrlError, parse_http_url};

/// The subset of an oEmbed response used for link cards.
#[derive(Debug, Deserialize)]
struct OEmbedPayload {
    title: Option<String>,
    thumbnail_url: Option<String>,
}

/// Queries `{endpoint}?url=<url>&format=json` and maps `title` and
/// `thumbnail_url` onto the card.
///
/// A non-success status from the provider means "no data for this URL" and
/// yields empty metadata rather than an error. Transport failures and
/// unparseable payloads are still errors.
pub struct OEmbedSource {
    fetcher: Arc<dyn Fetcher>,
    endpoint: Url,
}

impl OEmbedSource {
    /// # Errors
    ///
    /// Returns [`UrlError`] if `endpoint` is not an absolute HTTP(S) URL.
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoint: &str) -> Result<Self, UrlError> {
        Ok(Self {
            fetcher,
            endpoint: parse_http_url(endpoint)?,
        })
    }

    /// Builds the provider request URL for `target`.
    pub fn request_url(&self, target: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("url", target)
            .append_pair("format", "json");
        url
    }
}

#[async_trait]
impl PreviewSource for OEmbedSource {
    async fn lookup(&self, url: &str) -> Result<PageMetadata, FetchError> {
        let request_url = self.request_url(url);

        let page = match self
            .fetcher
            .fetch(request_url.as_str(), FetchOptions::get())
            .await
        {
            Ok(page) => page,
            Err(FetchError::Status(code)) => {
                debug!("oEmbed provider has no data for {} (HTTP {})", url, code);
                return Ok(PageMetadata::default());
            }
            Err(e) => return Err(e),
        };

        let payload: OEmbedPayload = serde_json::from_str(&page.body)
            .map_err(|e| FetchError::Decode(format!("invalid oEmbed payload: {e}")))?;

        Ok(PageMetadata::new(payload.title, payload.thumbnail_url))
    }
}
