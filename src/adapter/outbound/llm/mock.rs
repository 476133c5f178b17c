//! Scripted LLM for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Backend, CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Outcome a [`MockLlm`] replays.
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Empty,
    Malformed,
}

/// Replays one reply for every request and records what it was sent.
pub struct MockLlm {
    backend: Backend,
    reply: Reply,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl MockLlm {
    pub fn new(backend: Backend, reply: Reply) -> Self {
        Self {
            backend,
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn text(backend: Backend, text: impl Into<String>) -> Self {
        Self::new(backend, Reply::Text(text.into()))
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn backend(&self) -> Backend {
        self.backend
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(CompletionResponse {
                raw: text.clone(),
                text: text.clone(),
            }),
            Reply::Empty => Err(Error::EmptyResult {
                backend: self.backend,
            }),
            Reply::Malformed => Err(Error::MalformedResponse("expected value".into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Prompt, PromptStyle, Sampling};

    #[tokio::test]
    async fn mock_llm_records_requests() {
        let llm = MockLlm::text(Backend::Anthropic, "ls -la");
        let request = CompletionRequest {
            backend: Backend::Anthropic,
            model: "m".into(),
            prompt: Prompt::for_command("list", PromptStyle::Inline),
            sampling: Sampling {
                max_tokens: 10,
                temperature: None,
                top_p: None,
                reasoning_effort: None,
            },
        };
        let result = llm.complete(&request).await.unwrap();
        assert_eq!(result.text, "ls -la");
        assert_eq!(llm.requests().len(), 1);
    }
}
