//! Core data structures of the preview domain.
//!
//! - [`PreviewResult`] - The `{title, image}` link card returned to clients
//! - [`PageMetadata`] - Partial metadata produced by extraction tiers
//! - [`PreviewOutcome`] - Terminal state of one resolution
//! - [`Classification`] - Eligibility verdict of a provider-specific resolver

pub mod classification;
pub mod preview;

pub use classification::Classification;
pub use preview::{PageMetadata, PreviewOutcome, PreviewResult};
