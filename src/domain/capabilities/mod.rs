//! Capability traits a resolver is assembled from.
//!
//! A resolver is the capability set `{classifier?, source}` where the source
//! bundles fetching and extraction. Concrete implementations live in
//! `crate::infrastructure`; mock implementations are generated via `mockall`
//! for unit tests.
//!
//! - [`Fetcher`] - HTTP retrieval with redirect following
//! - [`MetadataExtractor`] - Title/image extraction from HTML
//! - [`UrlClassifier`] - Provider eligibility check
//! - [`PreviewSource`] - Metadata lookup for a URL

pub mod classifier;
pub mod extractor;
pub mod fetcher;
pub mod source;

pub use classifier::UrlClassifier;
pub use extractor::MetadataExtractor;
pub use fetcher::{FetchError, FetchMethod, FetchOptions, FetchedPage, Fetcher};
pub use source::PreviewSource;

#[cfg(test)]
pub use classifier::MockUrlClassifier;
#[cfg(test)]
pub use fetcher::MockFetcher;
#[cfg(test)]
pub use source::MockPreviewSource;
