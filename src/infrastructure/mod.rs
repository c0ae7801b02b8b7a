//! Infrastructure layer for external integrations.
//!
//! This layer implements the capability traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest-backed [`crate::domain::capabilities::Fetcher`]
//! - [`extract`] - HTML metadata extractors (structural, pattern, layered)
//! - [`sources`] - Scrape and oEmbed preview sources
//! - [`classify`] - Map-provider URL classifier
//! - [`cache`] - Preview caching (Redis and no-op implementations)

pub mod cache;
pub mod classify;
pub mod extract;
pub mod http;
pub mod sources;
