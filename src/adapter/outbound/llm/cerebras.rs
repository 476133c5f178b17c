//! Cerebras LLM client.
//!
//! Cerebras serves an OpenAI-compatible Chat Completions API, so the wire
//! types here follow the OpenAI shape plus the `reasoning_effort` knob that
//! Cerebras' reasoning models accept.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error_message;
use crate::domain::{Backend, CompletionRequest, CompletionResponse, ReasoningEffort};
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Public API host.
pub const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai";

/// Chat completions endpoint, relative to the base URL.
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Cerebras inference API client.
#[derive(Debug)]
pub struct Cerebras {
    /// HTTP client for API requests.
    client: Client,
    /// Bearer token.
    api_key: String,
    /// Scheme and host, without a trailing slash.
    base_url: String,
}

impl Cerebras {
    /// Create a client for the public Cerebras API.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured HTTP client (proxy, TLS or timeout settings).
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{COMPLETIONS_PATH}", self.base_url)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    stream: bool,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<ReasoningEffort>,
    messages: Vec<Message<'a>>,
}

impl<'a> From<&'a CompletionRequest> for Request<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.prompt.system.as_deref() {
            messages.push(Message {
                role: "system",
                content: system,
            });
        }
        messages.push(Message {
            role: "user",
            content: &request.prompt.user,
        });

        Self {
            model: &request.model,
            stream: false,
            max_tokens: request.sampling.max_tokens,
            temperature: request.sampling.temperature,
            top_p: request.sampling.top_p,
            reasoning_effort: request.sampling.reasoning_effort,
            messages,
        }
    }
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Response {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    // Reasoning models may answer with `"content": null`.
    #[serde(default)]
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a chat completions body.
pub(crate) fn parse_completion(body: &str) -> Result<String> {
    let response: Response = serde_json::from_str(body)?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(Error::EmptyResult {
            backend: Backend::Cerebras,
        })?;

    match choice.message.content {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::EmptyResult {
            backend: Backend::Cerebras,
        }),
    }
}

#[async_trait]
impl Llm for Cerebras {
    fn backend(&self) -> Backend {
        Backend::Cerebras
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let body = Request::from(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!(status = status.as_u16(), bytes = raw.len(), "cerebras response");

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        let text = parse_completion(&raw)?;
        Ok(CompletionResponse { raw, text })
    }
}
