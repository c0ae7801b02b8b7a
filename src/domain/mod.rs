//! Domain layer containing preview entities and capability traits.
//!
//! # Architecture
//!
//! - [`entities`] - Link cards, partial metadata, outcomes, classifications
//! - [`capabilities`] - Traits for fetching, extracting, classifying and
//!   looking up previews
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Resolution itself is orchestrated by
//! [`crate::application::services::PreviewService`].
//!
//! # Resolution Flow
//!
//! 1. HTTP handler receives `?url=`
//! 2. [`crate::application::services::PreviewService`] validates and checks the cache
//! 3. An optional [`capabilities::UrlClassifier`] rejects ineligible URLs
//! 4. A [`capabilities::PreviewSource`] fetches and extracts metadata
//! 5. The metadata is folded into a total [`entities::PreviewResult`]

pub mod capabilities;
pub mod entities;
