//! reqwest-backed implementation of [`Fetcher`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, header::CONTENT_TYPE, redirect::Policy};
use tracing::debug;

use crate::domain::capabilities::{FetchError, FetchMethod, FetchOptions, FetchedPage, Fetcher};
use crate::utils::http_url::{UrlError, parse_http_url};

/// Limits applied to every outgoing request.
#[derive(Debug, Clone)]
pub struct FetcherSettings {
    pub timeout: Duration,
    pub max_redirects: usize,
    pub max_body_bytes: usize,
    pub user_agent: String,
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_redirects: 5,
            max_body_bytes: 1024 * 1024,
            user_agent: concat!("link-preview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP fetcher with bounded time, redirects and body size.
///
/// Redirects are followed up to `max_redirects`; the reported `final_url` is
/// the URL of the last response. Cheap to share across requests.
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the TLS backend or client cannot
    /// be initialized.
    pub fn new(settings: FetcherSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent)
            .redirect(Policy::limited(settings.max_redirects))
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_body_bytes: settings.max_body_bytes,
        })
    }

    /// Reads the body chunk by chunk, stopping at the configured limit.
    async fn read_body(&self, response: &mut Response) -> Result<String, FetchError> {
        let mut buf: Vec<u8> = Vec::new();

        while let Some(chunk) = response.chunk().await.map_err(map_reqwest_error)? {
            let remaining = self.max_body_bytes - buf.len();
            if chunk.len() >= remaining {
                buf.extend_from_slice(&chunk[..remaining]);
                debug!("Body truncated at {} bytes", self.max_body_bytes);
                break;
            }
            buf.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, options: FetchOptions) -> Result<FetchedPage, FetchError> {
        let parsed = parse_http_url(url)?;

        let request = match options.method {
            FetchMethod::Get => self.client.get(parsed),
            FetchMethod::Head => self.client.head(parsed),
        };

        let mut response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!("Upstream {} returned {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = match options.method {
            FetchMethod::Head => String::new(),
            FetchMethod::Get => self.read_body(&mut response).await?,
        };

        debug!(
            "Fetched {} -> {} ({} bytes, {:?})",
            url,
            final_url,
            body.len(),
            content_type
        );

        Ok(FetchedPage {
            body,
            final_url,
            content_type,
        })
    }
}

impl From<UrlError> for FetchError {
    fn from(err: UrlError) -> Self {
        match err {
            UrlError::InvalidFormat(reason) => FetchError::InvalidUrl(reason),
            UrlError::UnsupportedProtocol(scheme) => FetchError::UnsupportedScheme(scheme),
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_decode() || err.is_body() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}
