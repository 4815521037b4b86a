//! Fetch a list of URLs and extract their readable article content.
//!
//! Failures are logged per URL and never change the exit status.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rs_readable::logging::{init_logging, LogFormat};
use rs_readable::url_utils::{parse_url_list, resolve_urls};
use rs_readable::{EmitFormat, Emitter, Error, HttpFetcher, Options, Orchestrator, ReadabilityExtractor};

#[derive(Debug, Parser)]
#[command(name = "readable", version, about = "Fetch URLs and extract readable article content")]
struct Args {
    /// URLs to process, in order. Defaults to a built-in pair when no URL is given.
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// File with one URL per line (`#` starts a comment). Read after positional URLs.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Total request timeout in seconds.
    #[arg(short, long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,

    /// User-Agent header to send.
    #[arg(long, value_name = "STRING")]
    user_agent: Option<String>,

    /// Write extracted articles to stdout in this format.
    #[arg(short, long, value_enum, default_value_t = EmitFormat::None)]
    emit: EmitFormat,

    /// Log line format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Args {
    fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone().unwrap_or_else(|| defaults.user_agent.clone()),
            ..defaults
        }
    }

    fn urls(&self) -> Result<Vec<String>, Error> {
        let from_file = match &self.input {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|source| Error::Input {
                    path: path.display().to_string(),
                    source,
                })?;
                parse_url_list(&contents)
            }
            None => Vec::new(),
        };
        Ok(resolve_urls(self.urls.clone(), from_file))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_format);

    let urls = match args.urls() {
        Ok(urls) => urls,
        Err(err) => {
            tracing::error!(path = err.url(), error = %err, "failed to read url list");
            return ExitCode::FAILURE;
        }
    };

    let options = args.options();
    let fetcher = match HttpFetcher::new(&options) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            tracing::error!(error = %err, "failed to create http client");
            return ExitCode::FAILURE;
        }
    };

    let orchestrator = Orchestrator::new(fetcher, ReadabilityExtractor::new(&options));
    let mut emitter = Emitter::new(args.emit, std::io::stdout());
    let _report = orchestrator.run(&urls, &mut emitter);

    ExitCode::SUCCESS
}
