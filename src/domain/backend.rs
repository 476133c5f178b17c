//! Hosted LLM backends.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// A hosted LLM provider that can complete shell commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Anthropic Messages API.
    Anthropic,
    /// Cerebras inference, OpenAI-compatible chat completions.
    Cerebras,
}

impl Backend {
    /// Every supported backend, in automatic-selection order.
    pub const ALL: [Backend; 2] = [Backend::Anthropic, Backend::Cerebras];

    /// Lowercase identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Backend::Anthropic => "anthropic",
            Backend::Cerebras => "cerebras",
        }
    }

    /// Environment variable holding this backend's API key.
    #[must_use]
    pub const fn credential_var(self) -> &'static str {
        match self {
            Backend::Anthropic => "ANTHROPIC_API_KEY",
            Backend::Cerebras => "CEREBRAS_API_KEY",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend '{0}' (expected anthropic or cerebras)")]
pub struct ParseBackendError(String);

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Backend::Anthropic),
            "cerebras" => Ok(Backend::Cerebras),
            _ => Err(ParseBackendError(s.to_string())),
        }
    }
}
