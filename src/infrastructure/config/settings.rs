//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Every section is optional; a missing
//! file means built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use shell_complete::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::credentials::Credentials;
use super::llm::LlmConfig;
use super::logging::LoggingConfig;
use crate::domain::{Backend, PromptStyle};
use crate::error::{ConfigError, Result};

/// Prompt construction settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub style: PromptStyle,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Provider selection and per-provider settings.
    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `explicit` if given, else `fallback` when it exists, else defaults.
    ///
    /// An explicitly named file must exist; the fallback may not.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that is read fails to parse or validate.
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if fallback.is_file() {
            debug!(path = %fallback.display(), "loading config");
            return Self::load(fallback);
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        self.llm.validate()
    }

    /// Pick the backend for this run.
    ///
    /// An explicit choice wins, then `llm.provider`, then the first backend
    /// with a key. With no keys at all Anthropic is chosen so the missing
    /// credential is reported against it.
    #[must_use]
    pub fn select_backend(&self, explicit: Option<Backend>, credentials: &Credentials) -> Backend {
        explicit
            .or(self.llm.provider)
            .or_else(|| credentials.available().first().copied())
            .unwrap_or(Backend::Anthropic)
    }

    /// Initialize logging from this configuration.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init(verbose);
    }
}
