//! Host/path patterns used to recognize provider URLs.

use std::fmt;
use std::str::FromStr;
use url::Url;

/// A `host[/path-prefix]` pattern such as `google.com/maps` or `maps.app.goo.gl`.
///
/// # Matching Rules
///
/// 1. **Host**: equal to the pattern host or a subdomain of it, ignoring case
///    (`www.google.com` matches `google.com`, `evilgoogle.com` does not)
/// 2. **Path**: when the pattern has a path prefix, the URL path must start
///    with it on a segment boundary (`/maps` matches `/maps/place/x`, not `/mapsfoo`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    host: String,
    path_prefix: Option<String>,
}

/// Error returned when a pattern string has no host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("URL pattern must start with a host, got '{0}'")]
pub struct InvalidPattern(pub String);

impl UrlPattern {
    /// Returns true if `url` matches this pattern.
    pub fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        let host = host.to_ascii_lowercase();

        let host_matches = host == self.host
            || host
                .strip_suffix(self.host.as_str())
                .is_some_and(|rest| rest.ends_with('.'));

        if !host_matches {
            return false;
        }

        match &self.path_prefix {
            None => true,
            Some(prefix) => {
                let path = url.path();
                path.strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            }
        }
    }

    /// Returns true if `url` parses as an absolute URL matching this pattern.
    pub fn matches_str(&self, url: &str) -> bool {
        Url::parse(url).is_ok_and(|parsed| self.matches(&parsed))
    }
}

impl FromStr for UrlPattern {
    type Err = InvalidPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('/');
        let (host, path) = match trimmed.split_once('/') {
            Some((host, path)) => (host, Some(path)),
            None => (trimmed, None),
        };

        if host.is_empty() {
            return Err(InvalidPattern(s.to_string()));
        }

        Ok(Self {
            host: host.to_ascii_lowercase(),
            path_prefix: path
                .filter(|p| !p.is_empty())
                .map(|p| format!("/{}", p.trim_start_matches('/'))),
        })
    }
}

impl fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path_prefix {
            Some(prefix) => write!(f, "{}{}", self.host, prefix),
            None => f.write_str(&self.host),
        }
    }
}
