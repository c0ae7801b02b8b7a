//! # Link Preview
//!
//! A link preview service built with Axum: turns a URL into a `{title, image}`
//! card for web pages and map links.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Preview entities and capability traits
//! - **Application Layer** ([`application`]) - The resolution pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP fetching, extraction, oEmbed, cache
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Page scraping with `<title>`/`og:title` and `og:image`/`rel=icon` fallbacks
//! - Structural HTML parsing backed by a regex tier for broken markup
//! - Map links: short-link expansion, provider check, oEmbed lookup
//! - Optional Redis caching of resolved cards
//! - Total results: an unreachable page still yields a card titled with its URL
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! # Start the service
//! cargo run
//!
//! curl 'http://localhost:3000/api/preview?url=https%3A%2F%2Fexample.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{PreviewService, ResolverKind};
    pub use crate::config::Config;
    pub use crate::domain::entities::{PreviewOutcome, PreviewResult};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
