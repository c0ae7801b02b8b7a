//! Application layer services implementing resolution logic.
//!
//! This layer sequences the domain capabilities (classification, lookup,
//! caching) into the preview pipeline and exposes a single API to the HTTP
//! handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::preview_service::PreviewService`] - URL to link card resolution

pub mod services;
