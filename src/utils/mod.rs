//! Utility functions for URL processing.
//!
//! - [`http_url`] - HTTP(S) URL validation and relative reference resolution
//! - [`url_pattern`] - `host[/path]` patterns for provider recognition

pub mod http_url;
pub mod url_pattern;
