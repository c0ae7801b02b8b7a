//! DTOs for the preview endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::PreviewResult;

/// Query string accepted by every preview endpoint.
///
/// `url` stays optional so a missing parameter reaches the resolver and is
/// reported as `{"error": "Missing URL"}` instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub url: Option<String>,
}

/// Link card returned for successful and degraded resolutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub title: String,
    pub image: String,
}

impl From<PreviewResult> for PreviewResponse {
    fn from(result: PreviewResult) -> Self {
        Self {
            title: result.title,
            image: result.image,
        }
    }
}
