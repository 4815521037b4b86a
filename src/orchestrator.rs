//! Sequential fetch-then-extract loop over a list of URLs.
//!
//! Every URL gets its own `tracing` span carrying a `url` field. The span is
//! handed to [`Orchestrator::process`] explicitly, so every event logged while
//! handling that URL is tagged with it. A failure is logged inside the span
//! and the loop moves on; one bad URL never stops the run.

use std::io::Write;

use tracing::Span;

use crate::error::{Error, Result};
use crate::extract::Extractor;
use crate::fetch::Fetcher;
use crate::output::Emitter;
use crate::result::Article;

/// What happened to one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Extracted { url: String, title: String, length: usize },
    FetchFailed { url: String, error: String },
    ExtractFailed { url: String, error: String },
}

impl ItemOutcome {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            ItemOutcome::Extracted { url, .. }
            | ItemOutcome::FetchFailed { url, .. }
            | ItemOutcome::ExtractFailed { url, .. } => url,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ItemOutcome::Extracted { .. })
    }
}

/// Outcomes of one run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl RunReport {
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Drives a [`Fetcher`] and an [`Extractor`] over a list of URLs.
#[derive(Debug)]
pub struct Orchestrator<F, E> {
    fetcher: F,
    extractor: E,
}

impl<F: Fetcher, E: Extractor> Orchestrator<F, E> {
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// Fetch and extract a single URL, logging within `span`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] or [`Error::Extract`] tagged with `url`.
    pub fn process(&self, url: &str, span: &Span) -> Result<Article> {
        span.in_scope(|| -> Result<Article> {
            tracing::info!("parsing article from url");

            let mut page = self.fetcher.fetch(url).map_err(|source| Error::Fetch {
                url: url.to_string(),
                source,
            })?;

            let article = self
                .extractor
                .extract(page.body.as_mut(), &page.url, page.content_type.as_deref())
                .map_err(|source| Error::Extract {
                    url: url.to_string(),
                    source,
                })?;

            tracing::info!(
                status = page.status.as_u16(),
                title = %article.title,
                length = article.length,
                "successfully parsed article"
            );
            Ok(article)
        })
    }

    /// Process every URL in order, emitting successful articles.
    ///
    /// Never fails: per-URL errors are logged and recorded in the report.
    pub fn run<I, S, W>(&self, urls: I, emitter: &mut Emitter<W>) -> RunReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut report = RunReport::default();

        for url in urls {
            let url = url.as_ref();
            let span = tracing::info_span!("article", url = %url);

            let outcome = match self.process(url, &span) {
                Ok(article) => {
                    if let Err(err) = emitter.emit(&article) {
                        span.in_scope(|| tracing::error!(error = %err, "failed to write article"));
                    }
                    ItemOutcome::Extracted {
                        url: url.to_string(),
                        title: article.title,
                        length: article.length,
                    }
                }
                Err(err) => {
                    span.in_scope(|| {
                        tracing::error!(stage = err.stage(), error = %err, "failed to parse article from url");
                    });
                    match err {
                        Error::Fetch { source, .. } => ItemOutcome::FetchFailed {
                            url: url.to_string(),
                            error: source.to_string(),
                        },
                        Error::Extract { source, .. } => ItemOutcome::ExtractFailed {
                            url: url.to_string(),
                            error: source.to_string(),
                        },
                        // The URL list is read before the run starts.
                        input @ Error::Input { .. } => ItemOutcome::FetchFailed {
                            url: url.to_string(),
                            error: input.to_string(),
                        },
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        tracing::info!(
            total = report.outcomes.len(),
            succeeded = report.succeeded(),
            failed = report.failed(),
            "finished processing urls"
        );
        report
    }
}
