//! Error types for rs-readable.
//!
//! Each stage of the pipeline has its own error enum. [`Error`] ties a stage
//! failure to the URL being processed so a log line can say which item failed
//! and where.

/// Failure while retrieving a URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The input is not an absolute `http`/`https` URL with a host.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request exceeded the configured total timeout.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Connection, DNS, TLS or other transport failure.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Failure while turning a fetched body into an [`Article`](crate::Article).
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Reading the response body failed.
    #[error("failed to read document body: {0}")]
    Read(#[from] std::io::Error),

    /// The body was empty or whitespace only.
    #[error("document is empty")]
    EmptyDocument,

    /// The readability library rejected the document.
    #[error("failed to parse document from {url}: {reason}")]
    Parse { url: String, reason: String },

    /// Parsing succeeded but produced no readable text.
    #[error("no readable content found in {0}")]
    NoContent(String),
}

/// A per-item failure, tagged with the URL and the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch url {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("failed to parse response body from {url}: {source}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },

    /// The URL list file could not be read.
    #[error("failed to read url list {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The URL (or input path) this error refers to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Error::Fetch { url, .. } | Error::Extract { url, .. } => url,
            Error::Input { path, .. } => path,
        }
    }

    /// Short stage label used in log fields.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Fetch { .. } => "fetch",
            Error::Extract { .. } => "extract",
            Error::Input { .. } => "input",
        }
    }
}

/// Result type alias for operations that report an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_carries_url_and_stage() {
        let err = Error::Fetch {
            url: "http://example.invalid/".to_string(),
            source: FetchError::InvalidUrl {
                url: "nope".to_string(),
                reason: "relative URL without a base".to_string(),
            },
        };

        assert_eq!(err.url(), "http://example.invalid/");
        assert_eq!(err.stage(), "fetch");
        let msg = err.to_string();
        assert!(msg.contains("http://example.invalid/"), "got: {msg}");
        assert!(msg.contains("relative URL without a base"), "got: {msg}");
    }

    #[test]
    fn extract_error_message_names_url() {
        let err = Error::Extract {
            url: "https://example.com/a".to_string(),
            source: ExtractError::NoContent("https://example.com/a".to_string()),
        };

        assert_eq!(err.stage(), "extract");
        assert!(err.to_string().starts_with("failed to parse response body from https://example.com/a"));
    }

    #[test]
    fn io_error_converts_into_read() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: ExtractError = io.into();
        assert!(matches!(err, ExtractError::Read(_)));
    }
}
