//! [`crate::domain::capabilities::UrlClassifier`] implementations.

mod maps;

pub use maps::MapsClassifier;
