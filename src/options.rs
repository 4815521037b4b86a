//! Configuration options for fetching and extraction.
//!
//! The `Options` struct controls the HTTP client and the readability pass.
//! The binary fills it from command-line arguments; library users can build
//! it directly.

use std::time::Duration;

/// Default total timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Selectors removed before readability runs. Share widgets are often
/// scored as content because they sit inside the article container.
pub const DEFAULT_DISCARD_SELECTORS: &[&str] = &[
    "[class*='share-buttons']",
    "[class*='social-share']",
    "[class*='sharing']",
    ".addthis_toolbox",
    ".sharedaddy",
];

/// Configuration options for fetching and extraction.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use rs_readable::Options;
///
/// let options = Options {
///     timeout: Duration::from_secs(3),
///     ..Options::default()
/// };
/// assert_eq!(options.char_threshold, 500);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Total timeout for one request, connect through body.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    ///
    /// Default: `rs-readable/<crate version>`
    pub user_agent: String,

    /// Upper bound on elements the readability pass will parse. `0` means
    /// no limit.
    ///
    /// Default: `0`
    pub max_elements_to_parse: usize,

    /// Minimum number of characters an article should have before the
    /// readability pass stops retrying with relaxed heuristics.
    ///
    /// Default: `500`
    pub char_threshold: usize,

    /// CSS selectors whose matches are removed before extraction.
    ///
    /// Default: [`DEFAULT_DISCARD_SELECTORS`]
    pub discard_selectors: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("rs-readable/", env!("CARGO_PKG_VERSION")).to_string(),
            max_elements_to_parse: 0,
            char_threshold: 500,
            discard_selectors: DEFAULT_DISCARD_SELECTORS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}
