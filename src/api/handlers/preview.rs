//! Handlers for the link preview endpoints.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::debug;

use crate::api::dto::preview::{PreviewQuery, PreviewResponse};
use crate::application::services::PreviewService;
use crate::domain::entities::PreviewResult;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a link card for any http(s) URL by scraping the page.
///
/// # Endpoint
///
/// `GET /api/preview?url=<percent-encoded URL>`
///
/// # Request Flow
///
/// 1. Trim the `url` parameter
/// 2. Check cache (cache key: `generic:<url>`)
/// 3. Fetch the page, following redirects
/// 4. Extract title and image (`<title>`, then `og:title`; `og:image`, then `rel=icon`)
/// 5. Cache and return the card
///
/// # Response Codes
///
/// - **200 OK**: `{"title", "image"}`, also when the page could not be
///   fetched (title falls back to the URL, image is empty)
/// - **400 Bad Request**: `{"error": "Missing URL"}`, or the query string
///   could not be parsed (e.g. `url` given twice)
pub async fn preview_handler(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    respond(&state.generic, query).await
}

/// Resolves a link card for a map link via the provider's oEmbed endpoint.
///
/// # Endpoint
///
/// `GET /api/preview/maps?url=<percent-encoded URL>`
///
/// Short links are expanded first; URLs that are not map links are
/// rejected before any oEmbed request is made.
///
/// # Response Codes
///
/// - **200 OK**: `{"title", "image"}`; on oEmbed failure the title is the
///   canonical map URL
/// - **400 Bad Request**: `{"error": "Missing URL"}` or
///   `{"error": "Not a valid Google Maps URL"}`
pub async fn maps_preview_handler(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    respond(&state.maps, query).await
}

/// Passes the URL straight to the oEmbed endpoint without classification.
///
/// # Endpoint
///
/// `GET /api/preview/maps/oembed?url=<percent-encoded URL>`
pub async fn maps_oembed_handler(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    respond(&state.maps_oembed, query).await
}

async fn respond(
    service: &PreviewService,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let Query(query) = query?;
    let raw = query.url.unwrap_or_default();
    let outcome = service.resolve(&raw).await;
    debug!(kind = %service.kind(), outcome = outcome.label(), "Preview resolved");

    let result = PreviewResult::try_from(outcome)?;
    Ok(Json(result.into()))
}
