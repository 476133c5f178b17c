//! Anthropic Claude LLM client.
//!
//! Provides an implementation of the [`Llm`] trait for the Anthropic
//! Messages API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error_message;
use crate::domain::{Backend, CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Public API host.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Messages endpoint, relative to the base URL.
const MESSAGES_PATH: &str = "/v1/messages";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Anthropic Claude API client.
#[derive(Debug)]
pub struct Anthropic {
    /// HTTP client for API requests.
    client: Client,
    /// API key sent as `x-api-key`.
    api_key: String,
    /// Scheme and host, without a trailing slash.
    base_url: String,
}

impl Anthropic {
    /// Create a client for the public Anthropic API.
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
        format!("{}{MESSAGES_PATH}", self.base_url)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

impl<'a> From<&'a CompletionRequest> for Request<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            max_tokens: request.sampling.max_tokens,
            temperature: request.sampling.temperature,
            top_p: request.sampling.top_p,
            system: request.prompt.system.as_deref(),
            messages: vec![Message {
                role: "user",
                content: &request.prompt.user,
            }],
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
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Extract `content[0].text` from a Messages API body.
pub(crate) fn parse_completion(body: &str) -> Result<String> {
    let response: Response = serde_json::from_str(body)?;
    let block = response
        .content
        .into_iter()
        .next()
        .ok_or(Error::EmptyResult {
            backend: Backend::Anthropic,
        })?;
    let text = block
        .text
        .ok_or_else(|| Error::MalformedResponse("content[0] has no text field".into()))?;

    if text.is_empty() {
        return Err(Error::EmptyResult {
            backend: Backend::Anthropic,
        });
    }
    Ok(text)
}

#[async_trait]
impl Llm for Anthropic {
    fn backend(&self) -> Backend {
        Backend::Anthropic
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let body = Request::from(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!(status = status.as_u16(), bytes = raw.len(), "anthropic response");

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
