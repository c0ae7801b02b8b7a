//! HTTP request handlers for API endpoints.

pub mod health;
pub mod preview;

pub use health::health_handler;
pub use preview::{maps_oembed_handler, maps_preview_handler, preview_handler};
