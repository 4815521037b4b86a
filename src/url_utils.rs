//! URL validation and URL-list parsing.

use url::Url;

use crate::error::FetchError;

/// URLs processed when none are supplied.
pub const DEFAULT_URLS: &[&str] = &[
    "https://cbea.ms/git-commit/",
    "https://tbaggery.com/2008/04/19/a-note-about-git-commit-messages.html",
];

/// Parse `s` as an absolute `http`/`https` URL with a host.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] when the string does not parse, uses
/// another scheme, or has no host.
pub fn parse_absolute_url(s: &str) -> Result<Url, FetchError> {
    let trimmed = s.trim();
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: s.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("empty url".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    Ok(url)
}

/// Split a URL list into entries.
///
/// One URL per line. Blank lines and lines starting with `#` are skipped and
/// surrounding whitespace is trimmed. Entries are not validated here so a
/// malformed line still shows up, and fails, in its place in the run.
#[must_use]
pub fn parse_url_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Merge command-line URLs with URLs read from a list file.
///
/// Arguments come first, then file entries, both in order. Falls back to
/// [`DEFAULT_URLS`] when both are empty.
#[must_use]
pub fn resolve_urls(args: Vec<String>, from_file: Vec<String>) -> Vec<String> {
    let mut urls = args;
    urls.extend(from_file);

    if urls.is_empty() {
        return DEFAULT_URLS.iter().map(|s| (*s).to_string()).collect();
    }

    urls
}
