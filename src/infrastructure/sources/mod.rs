//! [`crate::domain::capabilities::PreviewSource`] implementations.
//!
//! - [`ScrapeSource`] - HTML fetch + metadata extraction
//! - [`OEmbedSource`] - Provider oEmbed lookup

mod oembed;
mod scrape;

pub use oembed::OEmbedSource;
pub use scrape::ScrapeSource;
