//! Tracing subscriber installation.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {source}")]
    Filter {
        /// Directive that failed to parse.
        directive: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// the configured directive.
///
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when neither `RUST_LOG` nor the
/// configured directive yields a valid filter.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|source| TelemetryError::Filter {
            directive: config.filter.clone(),
            source,
        })?;

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .try_init();
    if installed.is_err() {
        debug!("tracing subscriber already installed");
    }
    Ok(())
}
