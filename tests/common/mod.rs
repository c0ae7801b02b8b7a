#![allow(dead_code)]

use axum_test::TestServer;
use link_preview::config::Config;
use link_preview::infrastructure::cache::{NullCache, PreviewCache};
use link_preview::routes::router;
use link_preview::state::AppState;
use std::sync::Arc;
use wiremock::MockServer;

/// Configuration pointing every upstream at `upstream`.
///
/// Map links are recognized as `127.0.0.1/maps/...`, short links as
/// `127.0.0.1/short/...`, and the oEmbed endpoint lives at `/oembed`.
pub fn test_config(upstream: &MockServer) -> Config {
    Config {
        fetch_timeout_secs: 2,
        maps_oembed_endpoint: format!("{}/oembed", upstream.uri()),
        maps_url_markers: vec!["127.0.0.1/maps".parse().unwrap()],
        maps_short_link_hosts: vec!["127.0.0.1/short".parse().unwrap()],
        ..Config::default()
    }
}

pub fn create_test_state(upstream: &MockServer) -> AppState {
    create_test_state_with_cache(upstream, Arc::new(NullCache::new()))
}

pub fn create_test_state_with_cache(
    upstream: &MockServer,
    cache: Arc<dyn PreviewCache>,
) -> AppState {
    AppState::from_config(&test_config(upstream), cache).unwrap()
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, &["*".to_string()])).unwrap()
}

pub fn html_page(head: &str) -> String {
    format!("<!DOCTYPE html><html><head>{head}</head><body><p>content</p></body></html>")
}
