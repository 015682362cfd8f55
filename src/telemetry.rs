//! Tracing subscriber setup for the terminal client.
//!
//! Logs always go to stderr; stdout belongs to the rendered form and results.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogConfig, LogFormat};

/// Directive appended when `--verbose` is passed.
pub const VERBOSE_DIRECTIVE: &str = "stacksense=debug";

/// Builds the filter from config, widening it for verbose runs.
///
/// `RUST_LOG` takes precedence over the configured filter when set.
pub fn filter(config: &LogConfig, verbose: bool) -> EnvFilter {
    let base = std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone());
    let directives = if verbose {
        format!("{},{}", base, VERBOSE_DIRECTIVE)
    } else {
        base
    };
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Installs the global subscriber.
///
/// A second call is a no-op, so tests and the binary can both call it.
pub fn init(config: &LogConfig, verbose: bool) {
    let builder = fmt()
        .with_env_filter(filter(config, verbose))
        .with_writer(io::stderr)
        .with_target(false);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
