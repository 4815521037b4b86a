//! HTTP retrieval of documents.
//!
//! [`Fetcher`] is the seam the orchestrator depends on; [`HttpFetcher`] is the
//! blocking `reqwest` implementation. Status codes are not interpreted: an
//! error page is still a document and goes on to extraction. The whole body is
//! downloaded inside `fetch`, under the same timeout as the request.

use std::fmt;
use std::io::Read;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use crate::error::FetchError;
use crate::options::Options;
use crate::url_utils::parse_absolute_url;

/// A fetched document with its body fully read into memory.
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Raw `Content-Type` header value, if sent.
    pub content_type: Option<String>,
    /// Response body.
    pub body: Box<dyn Read + Send>,
}

impl FetchedPage {
    /// Builds a page from an in-memory body.
    #[must_use]
    pub fn from_bytes(url: Url, status: StatusCode, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            url,
            status,
            content_type,
            body: Box::new(std::io::Cursor::new(body)),
        }
    }
}

impl fmt::Debug for FetchedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedPage")
            .field("url", &self.url.as_str())
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// Retrieves the document behind a URL.
pub trait Fetcher {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the URL is malformed or the request fails
    /// at the transport level.
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Blocking HTTP GET with a bounded total timeout and no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: std::time::Duration,
}

impl HttpFetcher {
    /// Builds a fetcher from `options` (timeout and user agent).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend or client cannot be
    /// initialised.
    pub fn new(options: &Options) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            timeout: options.timeout,
        })
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(err)
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = parse_absolute_url(url)?;

        let response = self.client.get(parsed).send().map_err(|e| self.classify(e))?;

        let status = response.status();
        let url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        tracing::debug!(
            status = status.as_u16(),
            final_url = %url,
            content_type = content_type.as_deref().unwrap_or(""),
            "received response"
        );
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "non-success status, extracting body anyway");
        }

        // The body is read here so a stalled or dropped transfer is a fetch
        // failure, not a parse failure.
        let body = response.bytes().map_err(|e| self.classify(e))?;

        Ok(FetchedPage::from_bytes(url, status, content_type, body.to_vec()))
    }
}
