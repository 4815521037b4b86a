//! # rs-readable
//!
//! Fetch web pages and extract their readable article content.
//!
//! Each URL is retrieved with a blocking HTTP GET and the body is handed to a
//! readability pass (`dom_smoothie`), producing an [`Article`] with the title,
//! the content as HTML, the content as plain text, and the text length.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readable::extract_html;
//! use url::Url;
//!
//! let html = "<html><head><title>T</title></head><body><p>Hello world</p></body></html>";
//! let base = Url::parse("https://example.com/post").map_err(|e| e.to_string())?;
//! let article = extract_html(html, &base).map_err(|e| e.to_string())?;
//! assert!(article.text_content.contains("Hello world"));
//! assert_eq!(article.length, article.text_content.chars().count());
//! # Ok::<(), String>(())
//! ```
//!
//! ## Components
//!
//! - [`Fetcher`] / [`HttpFetcher`]: retrieval, no status-code filtering
//! - [`Extractor`] / [`ReadabilityExtractor`]: bytes to [`Article`]
//! - [`Orchestrator`]: sequential loop, logs and skips failed URLs

mod error;
mod options;
mod result;

/// Character encoding detection and decoding.
pub mod encoding;

/// Article extraction backed by `dom_smoothie`.
pub mod extract;

/// HTTP retrieval.
pub mod fetch;

/// Global `tracing` subscriber setup.
pub mod logging;

/// The fetch-then-extract loop.
pub mod orchestrator;

/// Article emitters (text, JSON, Markdown).
pub mod output;

/// URL validation and URL-list parsing.
pub mod url_utils;

pub use error::{Error, ExtractError, FetchError, Result};
pub use extract::{Extractor, ReadabilityExtractor};
pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use options::{Options, DEFAULT_DISCARD_SELECTORS, DEFAULT_TIMEOUT};
pub use orchestrator::{ItemOutcome, Orchestrator, RunReport};
pub use output::{EmitFormat, Emitter};
pub use result::Article;

/// Extracts an article from an HTML string using default options.
///
/// # Errors
///
/// Returns an [`ExtractError`] when the document is empty, cannot be parsed,
/// or holds no readable text.
pub fn extract_html(html: &str, base_url: &url::Url) -> std::result::Result<Article, ExtractError> {
    ReadabilityExtractor::default().extract_str(html, base_url)
}

/// Fetches `url` and extracts its article. Failures are logged before they
/// are returned.
///
/// # Errors
///
/// Returns [`Error::Fetch`] or [`Error::Extract`] tagged with `url`.
pub fn fetch_article(url: &str, options: &Options) -> Result<Article> {
    let fetcher = HttpFetcher::new(options).map_err(|source| Error::Fetch {
        url: url.to_string(),
        source,
    })?;
    let orchestrator = Orchestrator::new(fetcher, ReadabilityExtractor::new(options));
    let span = tracing::info_span!("article", url = %url);
    orchestrator.process(url, &span).inspect_err(|err| {
        span.in_scope(|| tracing::error!(stage = err.stage(), error = %err, "failed to parse article from url"));
    })
}
