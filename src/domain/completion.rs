//! Completion request and response values.

use serde::{Deserialize, Serialize};

use super::{Backend, Prompt};

/// Reasoning budget hint for models that accept one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

/// Sampling parameters. Unset fields are left out of the wire request.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub reasoning_effort: Option<ReasoningEffort>,
}

/// A single completion call, built fresh per invocation.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub backend: Backend,
    pub model: String,
    pub prompt: Prompt,
    pub sampling: Sampling,
}

/// What came back from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Response body exactly as received.
    pub raw: String,
    /// The extracted completion. Never empty.
    pub text: String,
}
