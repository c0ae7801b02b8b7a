//! Eligibility check for map-provider links.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::domain::capabilities::{FetchOptions, Fetcher, UrlClassifier};
use crate::domain::entities::Classification;
use crate::utils::url_pattern::UrlPattern;

/// Recognizes map-provider pages and short links.
///
/// # Classification Flow
///
/// 1. Resolve redirects with a `HEAD` request (the input is kept when this fails)
/// 2. Eligible if the resolved URL matches a provider marker
/// 3. Eligible if the input matches a provider marker; the input stays
///    canonical, since the redirect led to an interstitial page
/// 4. Eligible if the input or resolved URL matches a short-link pattern
/// 5. Ineligible otherwise
pub struct MapsClassifier {
    fetcher: Arc<dyn Fetcher>,
    markers: Vec<UrlPattern>,
    short_links: Vec<UrlPattern>,
    provider_name: String,
}

impl MapsClassifier {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        markers: Vec<UrlPattern>,
        short_links: Vec<UrlPattern>,
        provider_name: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            markers,
            short_links,
            provider_name: provider_name.into(),
        }
    }

    async fn resolve_redirects(&self, url: &str) -> String {
        match self.fetcher.fetch(url, FetchOptions::head()).await {
            Ok(page) => page.final_url,
            Err(e) => {
                debug!("Redirect resolution failed for {}: {}", url, e);
                url.to_string()
            }
        }
    }

    fn is_marker(&self, url: &Url) -> bool {
        self.markers.iter().any(|p| p.matches(url))
    }

    fn is_short_link(&self, url: &Url) -> bool {
        self.short_links.iter().any(|p| p.matches(url))
    }
}

#[async_trait]
impl UrlClassifier for MapsClassifier {
    async fn classify(&self, url: &str) -> Classification {
        let canonical = self.resolve_redirects(url).await;

        let Ok(resolved) = Url::parse(&canonical) else {
            return Classification::ineligible(canonical);
        };

        if self.is_marker(&resolved) {
            return Classification::eligible(canonical);
        }

        let input = Url::parse(url).ok();
        if input.as_ref().is_some_and(|input| self.is_marker(input)) {
            debug!("{} redirected to {}, keeping the provider URL", url, canonical);
            return Classification::eligible(url);
        }

        let input_is_short_link = input.as_ref().is_some_and(|input| self.is_short_link(input));
        if input_is_short_link || self.is_short_link(&resolved) {
            return Classification::eligible(canonical);
        }

        debug!("{} ({}) is not a {} URL", url, canonical, self.provider_name);
        Classification::ineligible(canonical)
    }

    fn rejection_message(&self) -> String {
        format!("Not a valid {} URL", self.provider_name)
    }
}
