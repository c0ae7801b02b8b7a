//! Shared application state and resolver assembly.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::{PreviewService, ResolverKind};
use crate::config::Config;
use crate::domain::capabilities::{Fetcher, PreviewSource, UrlClassifier};
use crate::infrastructure::cache::PreviewCache;
use crate::infrastructure::classify::MapsClassifier;
use crate::infrastructure::extract::build_extractor;
use crate::infrastructure::http::HttpFetcher;
use crate::infrastructure::sources::{OEmbedSource, ScrapeSource};

/// Application state shared across all HTTP handlers.
///
/// Holds one [`PreviewService`] per [`ResolverKind`]. All of them share the
/// same outbound HTTP client and cache. Cloning is cheap (only `Arc` clones).
#[derive(Clone)]
pub struct AppState {
    pub generic: Arc<PreviewService>,
    pub maps: Arc<PreviewService>,
    pub maps_oembed: Arc<PreviewService>,
    pub cache: Arc<dyn PreviewCache>,
}

impl AppState {
    /// Builds every resolver from `config`, sharing one [`HttpFetcher`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the oEmbed
    /// endpoint is not an http(s) URL.
    pub fn from_config(config: &Config, cache: Arc<dyn PreviewCache>) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(
            HttpFetcher::new(config.fetcher_settings()).context("Failed to build HTTP client")?,
        );

        let build = |kind| build_service(config, kind, fetcher.clone(), cache.clone());

        Ok(Self {
            generic: Arc::new(build(ResolverKind::Generic)?),
            maps: Arc::new(build(ResolverKind::Maps)?),
            maps_oembed: Arc::new(build(ResolverKind::MapsOEmbed)?),
            cache,
        })
    }

    pub fn service(&self, kind: ResolverKind) -> &Arc<PreviewService> {
        match kind {
            ResolverKind::Generic => &self.generic,
            ResolverKind::Maps => &self.maps,
            ResolverKind::MapsOEmbed => &self.maps_oembed,
        }
    }
}

/// Assembles the capability set for one resolver kind.
///
/// | kind          | classifier          | source          |
/// |---------------|---------------------|-----------------|
/// | `generic`     | none                | [`ScrapeSource`] |
/// | `maps`        | [`MapsClassifier`]  | [`OEmbedSource`] |
/// | `maps-oembed` | none                | [`OEmbedSource`] |
pub fn build_service(
    config: &Config,
    kind: ResolverKind,
    fetcher: Arc<dyn Fetcher>,
    cache: Arc<dyn PreviewCache>,
) -> Result<PreviewService> {
    let (classifier, source): (Option<Arc<dyn UrlClassifier>>, Arc<dyn PreviewSource>) =
        match kind {
            ResolverKind::Generic => (
                None,
                Arc::new(ScrapeSource::new(fetcher, build_extractor(config.extractor))),
            ),
            ResolverKind::Maps => (
                Some(Arc::new(MapsClassifier::new(
                    fetcher.clone(),
                    config.maps_url_markers.clone(),
                    config.maps_short_link_hosts.clone(),
                    config.maps_provider_name.clone(),
                ))),
                Arc::new(oembed_source(config, fetcher)?),
            ),
            ResolverKind::MapsOEmbed => (None, Arc::new(oembed_source(config, fetcher)?)),
        };

    Ok(PreviewService::new(kind, classifier, source, cache).with_cache_ttl(config.cache_ttl_seconds))
}

fn oembed_source(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<OEmbedSource> {
    OEmbedSource::new(fetcher, &config.maps_oembed_endpoint)
        .with_context(|| format!("Invalid MAPS_OEMBED_ENDPOINT '{}'", config.maps_oembed_endpoint))
}
