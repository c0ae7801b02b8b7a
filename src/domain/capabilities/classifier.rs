//! URL eligibility capability for provider-specific resolvers.

use async_trait::async_trait;

use crate::domain::entities::Classification;

/// Decides whether a URL belongs to a provider before resolution.
///
/// Classification itself never fails; a URL that cannot be inspected is
/// simply ineligible.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlClassifier: Send + Sync {
    async fn classify(&self, url: &str) -> Classification;

    /// Message returned to the caller when a URL is ineligible.
    fn rejection_message(&self) -> String;
}
