//! Global `tracing` subscriber setup.
//!
//! Events go to stdout as `key=value` text or one JSON object per line. The
//! default filter is `info`; `RUST_LOG` overrides it. Only the first call
//! installs a subscriber, later calls are no-ops.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Output encoding for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .with_target(false);

        // Another subscriber may already be installed.
        let installed = match format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().flatten_event(true).with_current_span(true).try_init(),
        };
        if let Err(err) = installed {
            tracing::debug!(error = %err, "tracing subscriber already set");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LogFormat::Text);
        init_logging(LogFormat::Json);
        assert!(tracing::dispatcher::has_been_set());
        tracing::info!(url = "https://example.com/", "still logging");
    }
}
