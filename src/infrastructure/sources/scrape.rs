//! Preview source that downloads the page and extracts metadata from it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::capabilities::{
    FetchError, FetchOptions, Fetcher, MetadataExtractor, PreviewSource,
};
use crate::domain::entities::PageMetadata;
use crate::utils::http_url::absolutize;

/// Fetches a URL with `GET` and runs a [`MetadataExtractor`] over the body.
///
/// Relative image references are resolved against the final URL after
/// redirects. A URL that serves an image directly becomes its own preview
/// image.
pub struct ScrapeSource {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn MetadataExtractor>,
}

impl ScrapeSource {
    pub fn new(fetcher: Arc<dyn Fetcher>, extractor: Arc<dyn MetadataExtractor>) -> Self {
        Self { fetcher, extractor }
    }
}

#[async_trait]
impl PreviewSource for ScrapeSource {
    async fn lookup(&self, url: &str) -> Result<PageMetadata, FetchError> {
        let page = self.fetcher.fetch(url, FetchOptions::get()).await?;

        let is_image = page
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"));
        if is_image {
            debug!("{} is an image, using it as its own preview", page.final_url);
            return Ok(PageMetadata::new(None, Some(page.final_url)));
        }

        let mut metadata = self.extractor.scan(&page.body);
        metadata.image = metadata
            .image
            .map(|image| absolutize(&image, &page.final_url));

        Ok(metadata)
    }
}
