//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                   - Health check: cache (public)
//! - `GET /api/preview`              - Generic link card
//! - `GET /api/preview/maps`         - Map link card (classified)
//! - `GET /api/preview/maps/oembed`  - Map link card (unclassified)
//!
//! # Middleware
//!
//! - **Panic capture** - A panicking handler answers 500 with a card-shaped body
//! - **CORS** - `GET` from `CORS_ALLOWED_ORIGINS`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::error::handle_panic;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - allowed browser origins; `"*"` allows any
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_origins))
}

/// The routed application without path normalization.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::preview_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer())
}
