//! Configuration loading for the `reflow` binary.
//!
//! Only ambient concerns are configurable; the reflow rules themselves are
//! fixed. Sources, later ones winning:
//!
//! 1. `reflow.toml` in the working directory (optional), or the file passed
//!    with `--config` (required when given)
//! 2. environment variables prefixed `REFLOW__`, nested keys separated by `__`
//! 3. command-line flags, applied by the binary after loading
//!
//! ## Example
//!
//! ```toml
//! [log]
//! level = "reflow=debug"
//! format = "json"
//! ```
//!
//! The same settings from the environment:
//!
//! ```text
//! REFLOW__LOG__LEVEL=reflow=debug
//! REFLOW__LOG__FORMAT=json
//! ```

use std::path::Path;

use ::config::builder::DefaultState;
use ::config::{ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "reflow.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "REFLOW";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowConfig {
    #[serde(default)]
    pub log: LogConfig,
}

/// Diagnostics output settings. Logs are always written to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `info` or `reflow=debug`.
    ///
    /// When unset, `RUST_LOG` is consulted before falling back to
    /// [`DEFAULT_FILTER`](crate::logging::DEFAULT_FILTER).
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl ReflowConfig {
    /// Loads configuration from `./reflow.toml` (or `explicit`) and the
    /// environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigLoadError> {
        Self::load_in(Path::new("."), explicit)
    }

    /// Like [`ReflowConfig::load`], with the default file looked up in `dir`.
    pub fn load_in(dir: &Path, explicit: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let file = match explicit {
            Some(path) => File::from(path).required(true),
            // Exact name and format, so a sibling file called `reflow` (the
            // binary itself, say) is never picked up instead.
            None => File::from(dir.join(DEFAULT_CONFIG_FILE).as_path())
                .format(FileFormat::Toml)
                .required(false),
        };
        let builder = ::config::Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        Self::from_builder(builder)
    }

    /// Parses configuration from a TOML string, without consulting the
    /// environment.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        let builder =
            ::config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigLoadError> {
        let config: ReflowConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.log.validate()
    }
}

impl LogConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let Some(level) = self.level.as_deref() else {
            return Ok(());
        };
        if level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "log.level must not be empty".to_string(),
            ));
        }
        EnvFilter::try_new(level).map_err(|err| {
            ConfigLoadError::Validation(format!("log.level `{level}` is not a valid filter: {err}"))
        })?;
        Ok(())
    }
}
