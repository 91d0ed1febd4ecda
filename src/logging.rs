//! `tracing` subscriber setup for the binary.
//!
//! Everything is written to stderr. Stdout is reserved for the reflowed text
//! so the output can be piped or redirected without log noise.

use std::io;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

use crate::config::{LogConfig, LogFormat};

/// Filter used when neither the configuration nor `RUST_LOG` sets one.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter `{filter}`")]
    Filter {
        filter: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install log subscriber")]
    Install(#[from] TryInitError),
}

/// Builds the event filter: explicit level, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
pub fn env_filter(level: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match level {
        Some(filter) => EnvFilter::try_new(filter).map_err(|source| LoggingError::Filter {
            filter: filter.to_string(),
            source,
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the global subscriber. Call once, before any work is done.
pub fn init(log: &LogConfig) -> Result<(), LoggingError> {
    let filter = env_filter(log.level.as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(io::stderr).with_target(false))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
    }
    Ok(())
}
