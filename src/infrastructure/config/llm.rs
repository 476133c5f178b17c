//! LLM provider configuration.
//!
//! Per-provider model and sampling settings. API keys never live here; see
//! [`Credentials`](super::credentials::Credentials).

use serde::Deserialize;

use crate::adapter::outbound::llm::{anthropic, cerebras};
use crate::domain::{Backend, ReasoningEffort, Sampling};
use crate::error::{ConfigError, Result};

/// LLM provider configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmConfig {
    /// Backend to use. When unset the first backend with a key wins.
    #[serde(default)]
    pub provider: Option<Backend>,

    /// Anthropic-specific settings.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Cerebras-specific settings.
    #[serde(default)]
    pub cerebras: CerebrasConfig,
}

impl LlmConfig {
    /// Model identifier configured for `backend`.
    #[must_use]
    pub fn model(&self, backend: Backend) -> &str {
        match backend {
            Backend::Anthropic => &self.anthropic.model,
            Backend::Cerebras => &self.cerebras.model,
        }
    }

    /// Base URL configured for `backend`.
    #[must_use]
    pub fn base_url(&self, backend: Backend) -> &str {
        match backend {
            Backend::Anthropic => &self.anthropic.base_url,
            Backend::Cerebras => &self.cerebras.base_url,
        }
    }

    /// Sampling parameters configured for `backend`.
    #[must_use]
    pub fn sampling(&self, backend: Backend) -> Sampling {
        match backend {
            Backend::Anthropic => Sampling {
                max_tokens: self.anthropic.max_tokens,
                temperature: self.anthropic.temperature,
                top_p: self.anthropic.top_p,
                reasoning_effort: None,
            },
            Backend::Cerebras => Sampling {
                max_tokens: self.cerebras.max_tokens,
                temperature: self.cerebras.temperature,
                top_p: self.cerebras.top_p,
                reasoning_effort: self.cerebras.reasoning_effort,
            },
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for backend in Backend::ALL {
            if self.model(backend).trim().is_empty() {
                return Err(ConfigError::MissingField { field: "model" }.into());
            }
            let base_url = self.base_url(backend);
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "base_url",
                    reason: format!("'{base_url}' is not an http(s) URL"),
                }
                .into());
            }

            let sampling = self.sampling(backend);
            if sampling.max_tokens == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "max_tokens",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
            if let Some(t) = sampling.temperature {
                if !(0.0..=2.0).contains(&t) {
                    return Err(ConfigError::InvalidValue {
                        field: "temperature",
                        reason: "must be between 0 and 2".to_string(),
                    }
                    .into());
                }
            }
            if let Some(p) = sampling.top_p {
                if !(0.0..=1.0).contains(&p) {
                    return Err(ConfigError::InvalidValue {
                        field: "top_p",
                        reason: "must be between 0 and 1".to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}

/// Anthropic-specific configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    /// Model identifier.
    ///
    /// Defaults to "claude-haiku-4-5-20251001".
    #[serde(default = "default_anthropic_model")]
    pub model: String,

    /// Maximum tokens in the response. Defaults to 150.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature. Provider default when unset.
    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub top_p: Option<f64>,

    /// API host. Defaults to the public endpoint.
    #[serde(default = "default_anthropic_base_url")]
    pub base_url: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            max_tokens: default_max_tokens(),
            temperature: None,
            top_p: None,
            base_url: default_anthropic_base_url(),
        }
    }
}

/// Cerebras-specific configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CerebrasConfig {
    /// Model identifier.
    ///
    /// Defaults to "gpt-oss-120b".
    #[serde(default = "default_cerebras_model")]
    pub model: String,

    /// Maximum tokens in the response. Defaults to 150.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Defaults to 1.0.
    #[serde(default = "default_unit")]
    pub temperature: Option<f64>,

    /// Defaults to 1.0.
    #[serde(default = "default_unit")]
    pub top_p: Option<f64>,

    /// Defaults to medium.
    #[serde(default = "default_reasoning_effort")]
    pub reasoning_effort: Option<ReasoningEffort>,

    /// API host. Defaults to the public endpoint.
    #[serde(default = "default_cerebras_base_url")]
    pub base_url: String,
}

impl Default for CerebrasConfig {
    fn default() -> Self {
        Self {
            model: default_cerebras_model(),
            max_tokens: default_max_tokens(),
            temperature: default_unit(),
            top_p: default_unit(),
            reasoning_effort: default_reasoning_effort(),
            base_url: default_cerebras_base_url(),
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-haiku-4-5-20251001".into()
}

fn default_cerebras_model() -> String {
    "gpt-oss-120b".into()
}

fn default_anthropic_base_url() -> String {
    anthropic::DEFAULT_BASE_URL.into()
}

fn default_cerebras_base_url() -> String {
    cerebras::DEFAULT_BASE_URL.into()
}

const fn default_max_tokens() -> u32 {
    150
}

const fn default_unit() -> Option<f64> {
    Some(1.0)
}

const fn default_reasoning_effort() -> Option<ReasoningEffort> {
    Some(ReasoningEffort::Medium)
}
