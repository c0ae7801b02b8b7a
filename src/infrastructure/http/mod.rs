//! Outgoing HTTP.

mod fetcher;

pub use fetcher::{FetcherSettings, HttpFetcher};
