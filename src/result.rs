//! Result types for extraction output.
//!
//! An [`Article`] is produced once per successful extraction and is not
//! modified afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Readable content extracted from an HTML document.
///
/// `length` always equals `text_content.chars().count()`; use
/// [`Article::new`] to build one so the two cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Document title. Empty when none was found.
    pub title: String,

    /// Extracted content with its HTML structure preserved.
    pub raw_content: String,

    /// Extracted content with all markup stripped.
    pub text_content: String,

    /// Character count of `text_content`.
    pub length: usize,

    /// Short summary, usually the first paragraph or the meta description.
    pub excerpt: Option<String>,

    /// Author line.
    pub byline: Option<String>,

    /// Site name (e.g. from `og:site_name`).
    pub site_name: Option<String>,

    /// Document language as declared by the page.
    pub language: Option<String>,

    /// Publication time, when the page declares a parseable one.
    pub published_time: Option<DateTime<Utc>>,

    /// URL the article was extracted against.
    pub url: Option<String>,
}

impl Article {
    /// Creates an article from its content, computing `length` from `text_content`.
    #[must_use]
    pub fn new(title: String, raw_content: String, text_content: String) -> Self {
        let length = text_content.chars().count();
        Self {
            title,
            raw_content,
            text_content,
            length,
            ..Self::default()
        }
    }

    /// Returns `true` when the article has no readable text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text_content.trim().is_empty()
    }
}

/// Parses a timestamp reported by a page into UTC.
///
/// Accepts RFC 3339 (`2024-01-15T10:30:00Z`, with or without offset) and bare
/// dates (`2024-01-15`, taken as midnight UTC). Anything else yields `None`.
#[must_use]
pub fn parse_published_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
