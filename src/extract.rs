//! Article extraction.
//!
//! The readability algorithm itself lives in `dom_smoothie`; this module
//! decodes the fetched bytes, strips configured noise with `dom_query`, and
//! maps the library's article onto [`Article`].

use std::io::Read;

use dom_query::Document;
use dom_smoothie::{Config, Readability};
use url::Url;

use crate::encoding::decode_html;
use crate::error::ExtractError;
use crate::options::Options;
use crate::result::{parse_published_time, Article};

/// Turns a document body into an [`Article`].
pub trait Extractor {
    /// Extract the readable article from `body`, resolving relative
    /// references against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] when the body cannot be read or parsed, or
    /// holds no readable content.
    fn extract(
        &self,
        body: &mut dyn Read,
        base_url: &Url,
        content_type: Option<&str>,
    ) -> Result<Article, ExtractError>;
}

/// [`Extractor`] backed by `dom_smoothie`'s port of Mozilla Readability.
#[derive(Debug, Clone)]
pub struct ReadabilityExtractor {
    max_elements_to_parse: usize,
    char_threshold: usize,
    discard_selectors: Vec<String>,
}

impl ReadabilityExtractor {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            max_elements_to_parse: options.max_elements_to_parse,
            char_threshold: options.char_threshold,
            discard_selectors: options.discard_selectors.clone(),
        }
    }

    fn config(&self) -> Config {
        Config {
            max_elements_to_parse: self.max_elements_to_parse,
            char_threshold: self.char_threshold,
            ..Config::default()
        }
    }

    /// Extract from an already-decoded HTML string.
    ///
    /// # Errors
    ///
    /// See [`Extractor::extract`].
    pub fn extract_str(&self, html: &str, base_url: &Url) -> Result<Article, ExtractError> {
        if html.trim().is_empty() {
            return Err(ExtractError::EmptyDocument);
        }

        let document = Document::from(html);
        self.discard_noise(&document);

        let mut reader = Readability::with_document(document, Some(base_url.as_str()), Some(self.config()))
            .map_err(|e| ExtractError::Parse {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        let parsed = reader.parse().map_err(|e| ExtractError::Parse {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut article = Article::new(
            parsed.title.trim().to_string(),
            parsed.content.to_string(),
            parsed.text_content.to_string(),
        );
        if article.is_empty() {
            return Err(ExtractError::NoContent(base_url.to_string()));
        }

        article.excerpt = non_empty(parsed.excerpt);
        article.byline = non_empty(parsed.byline);
        article.site_name = non_empty(parsed.site_name);
        article.language = non_empty(parsed.lang);
        article.published_time = parsed.published_time.as_deref().and_then(parse_published_time);
        article.url = Some(base_url.to_string());

        Ok(article)
    }

    /// Remove elements matching the discard selectors. Invalid selectors
    /// are skipped.
    fn discard_noise(&self, document: &Document) {
        for selector in &self.discard_selectors {
            if let Some(matched) = document.try_select(selector) {
                tracing::trace!(selector = %selector, count = matched.length(), "discarding elements");
                matched.remove();
            }
        }
    }
}

impl Default for ReadabilityExtractor {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl Extractor for ReadabilityExtractor {
    fn extract(
        &self,
        body: &mut dyn Read,
        base_url: &Url,
        content_type: Option<&str>,
    ) -> Result<Article, ExtractError> {
        let mut bytes = Vec::new();
        body.read_to_end(&mut bytes)?;

        let html = decode_html(&bytes, content_type);
        self.extract_str(&html, base_url)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
