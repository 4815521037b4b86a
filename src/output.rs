//! Writing extracted articles to an output stream.

use std::io::{self, Write};

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::result::Article;

/// How extracted articles are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EmitFormat {
    /// Log only, write nothing.
    #[default]
    None,
    /// Title line, blank line, plain text.
    Text,
    /// One JSON object per line.
    Json,
    /// Title as a heading followed by the content converted to Markdown.
    Markdown,
}

/// Writes articles to `out` in the configured format.
#[derive(Debug)]
pub struct Emitter<W: Write> {
    format: EmitFormat,
    out: W,
}

impl<W: Write> Emitter<W> {
    #[must_use]
    pub fn new(format: EmitFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Write one article.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, or an `InvalidData` error if JSON
    /// serialization fails.
    pub fn emit(&mut self, article: &Article) -> io::Result<()> {
        match self.format {
            EmitFormat::None => return Ok(()),
            EmitFormat::Text => {
                writeln!(self.out, "{}", article.title)?;
                writeln!(self.out)?;
                writeln!(self.out, "{}", article.text_content.trim())?;
                writeln!(self.out)?;
            }
            EmitFormat::Json => {
                serde_json::to_writer(&mut self.out, article)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(self.out)?;
            }
            EmitFormat::Markdown => {
                if !article.title.is_empty() {
                    writeln!(self.out, "# {}", article.title)?;
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{}", to_markdown(&article.raw_content).trim())?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Convert article HTML to Markdown, keeping links and tables.
#[must_use]
pub fn to_markdown(html: &str) -> String {
    let options = MarkdownOptions::new()
        .include_links(true)
        .include_images(false)
        .preserve_tables(true);
    html_to_markdown_with_options(html, &options)
}
