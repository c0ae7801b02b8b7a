//! URL parsing helpers shared by the fetcher and the sources.

use url::Url;

/// Errors that can occur while validating a URL before fetching it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedProtocol(String),
}

/// Parses an absolute HTTP(S) URL.
///
/// Rejects relative references and any other scheme (`javascript:`, `file:`,
/// `data:`, ...).
///
/// # Errors
///
/// Returns [`UrlError::InvalidFormat`] for malformed or relative input.
/// Returns [`UrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn parse_http_url(input: &str) -> Result<Url, UrlError> {
    let url = Url::parse(input).map_err(|e| UrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlError::UnsupportedProtocol(other.to_string())),
    }
}

/// Resolves a possibly relative reference found in a page against the
/// page's URL.
///
/// Absolute references are returned verbatim. When neither the reference
/// nor the base can be parsed, the reference is returned unchanged.
///
/// ```ignore
/// assert_eq!(
///     absolutize("/img/card.png", "https://example.com/a/b"),
///     "https://example.com/img/card.png"
/// );
/// ```
pub fn absolutize(reference: &str, base: &str) -> String {
    if Url::parse(reference).is_ok() {
        return reference.to_string();
    }

    Url::parse(base)
        .and_then(|base| base.join(reference))
        .map(|resolved| resolved.to_string())
        .unwrap_or_else(|_| reference.to_string())
}
