//! Logging configuration and initialization.
//!
//! Everything goes to stderr: stdout is reserved for the completion so the
//! helper can be used inside `$(...)`.

use std::io::IsTerminal;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Level after applying `-v` flags on top of the configured one.
    #[must_use]
    pub fn effective_level(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.level,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize the tracing subscriber. `RUST_LOG` wins over both the
    /// configured level and `-v`.
    pub fn init(&self, verbose: u8) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.effective_level(verbose)));

        let ansi = std::io::stderr().is_terminal();

        // A second init (tests, embedding) is not an error worth reporting.
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}
