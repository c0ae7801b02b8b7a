//! API route configuration.
//!
//! The preview endpoints are public; the Hub UI calls them from the browser.

use crate::api::handlers::{maps_oembed_handler, maps_preview_handler, preview_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Preview routes, one per resolver kind.
///
/// # Endpoints
///
/// - `GET /preview`              - Generic page scraping
/// - `GET /preview/maps`         - Map links: classification + oEmbed
/// - `GET /preview/maps/oembed`  - oEmbed without classification
pub fn preview_routes() -> Router<AppState> {
    Router::new()
        .route("/preview", get(preview_handler))
        .route("/preview/maps", get(maps_preview_handler))
        .route("/preview/maps/oembed", get(maps_oembed_handler))
}
