//! Shell command completion service.
//!
//! Wraps the partial command in a prompt, sends it through the [`Llm`] for
//! the chosen backend and returns the completion. [`Completer::complete`]
//! never fails: every error is logged and folded into an empty string.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{Backend, CompletionRequest, CompletionResponse, Prompt, PromptStyle, Sampling};
use crate::error::{Error, Result};
use crate::port::outbound::llm::Llm;

/// Model and sampling settings for one backend.
#[derive(Debug, Clone)]
pub struct ModelProfile {
    pub model: String,
    pub sampling: Sampling,
}

struct Route {
    profile: ModelProfile,
    /// `None` when the backend has no credential.
    client: Option<Arc<dyn Llm>>,
}

/// Completion service over any number of backends.
pub struct Completer {
    style: PromptStyle,
    routes: HashMap<Backend, Route>,
}

impl Completer {
    /// Create a completer with no backends registered.
    #[must_use]
    pub fn new(style: PromptStyle) -> Self {
        Self {
            style,
            routes: HashMap::new(),
        }
    }

    /// Register a backend. Pass `None` for the client when no credential is
    /// available; calls to that backend then fail without touching the network.
    pub fn register(
        &mut self,
        backend: Backend,
        profile: ModelProfile,
        client: Option<Arc<dyn Llm>>,
    ) {
        self.routes.insert(backend, Route { profile, client });
    }

    /// Model configured for `backend`, if registered.
    #[must_use]
    pub fn model(&self, backend: Backend) -> Option<&str> {
        self.routes.get(&backend).map(|r| r.profile.model.as_str())
    }

    /// Build the request that would be sent for `command`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialMissing`] if `backend` was never registered.
    pub fn request(&self, backend: Backend, command: &str) -> Result<CompletionRequest> {
        let route = self.route(backend)?;
        Ok(CompletionRequest {
            backend,
            model: route.profile.model.clone(),
            prompt: Prompt::for_command(command, self.style),
            sampling: route.profile.sampling.clone(),
        })
    }

    /// Complete `command`, surfacing the failure reason.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialMissing`] when the backend has no client,
    /// otherwise whatever the client returns.
    pub async fn try_complete(&self, backend: Backend, command: &str) -> Result<CompletionResponse> {
        let route = self.route(backend)?;
        let client = route.client.as_ref().ok_or(Error::CredentialMissing {
            var: backend.credential_var(),
        })?;

        let request = self.request(backend, command)?;
        debug!(provider = %backend, model = %request.model, "sending completion request");
        let response = client.complete(&request).await?;
        debug!(provider = %backend, chars = response.text.len(), "completion received");
        Ok(response)
    }

    /// Complete `command`, returning an empty string on any failure.
    pub async fn complete(&self, backend: Backend, command: &str) -> String {
        match self.try_complete(backend, command).await {
            Ok(response) => response.text,
            Err(e) => {
                error!(provider = %backend, error = %e, "completion failed");
                String::new()
            }
        }
    }

    fn route(&self, backend: Backend) -> Result<&Route> {
        self.routes.get(&backend).ok_or(Error::CredentialMissing {
            var: backend.credential_var(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::llm::mock::{MockLlm, Reply};

    fn profile() -> ModelProfile {
        ModelProfile {
            model: "test-model".into(),
            sampling: Sampling {
                max_tokens: 150,
                temperature: None,
                top_p: None,
                reasoning_effort: None,
            },
        }
    }

    fn completer_with(llm: Arc<MockLlm>) -> Completer {
        let backend = llm.backend();
        let mut completer = Completer::new(PromptStyle::FewShot);
        completer.register(backend, profile(), Some(llm as Arc<dyn Llm>));
        completer
    }

    #[tokio::test]
    async fn returns_completion_text() {
        let llm = Arc::new(MockLlm::text(Backend::Anthropic, r#"find . -name "*.pdf""#));
        let completer = completer_with(llm.clone());

        let result = completer.complete(Backend::Anthropic, "find all pdf files").await;
        assert_eq!(result, r#"find . -name "*.pdf""#);

        let sent = llm.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].model, "test-model");
        assert_eq!(sent[0].prompt.user, "Input: find all pdf files\nOutput:");
    }

    #[tokio::test]
    async fn missing_client_is_empty_without_a_call() {
        let mut completer = Completer::new(PromptStyle::FewShot);
        completer.register(Backend::Cerebras, profile(), None);

        assert_eq!(completer.complete(Backend::Cerebras, "ls").await, "");
        let err = completer
            .try_complete(Backend::Cerebras, "ls")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::CredentialMissing {
                var: "CEREBRAS_API_KEY"
            }
        ));
    }

    #[tokio::test]
    async fn unregistered_backend_is_credential_missing() {
        let completer = Completer::new(PromptStyle::Inline);
        let err = completer
            .try_complete(Backend::Anthropic, "ls")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CredentialMissing { .. }));
    }

    #[tokio::test]
    async fn client_errors_fold_to_empty() {
        for reply in [Reply::Empty, Reply::Malformed] {
            let llm = Arc::new(MockLlm::new(Backend::Cerebras, reply));
            let completer = completer_with(llm.clone());
            assert_eq!(completer.complete(Backend::Cerebras, "ls").await, "");
            assert_eq!(llm.requests().len(), 1);
        }
    }

    #[test]
    fn request_uses_configured_style() {
        let mut completer = Completer::new(PromptStyle::Inline);
        completer.register(Backend::Anthropic, profile(), None);
        let request = completer.request(Backend::Anthropic, "git sta").unwrap();
        assert!(request.prompt.system.is_none());
        assert!(request.prompt.user.ends_with("git sta"));
        assert_eq!(request.sampling.max_tokens, 150);
        assert_eq!(completer.model(Backend::Anthropic), Some("test-model"));
        assert_eq!(completer.model(Backend::Cerebras), None);
    }
}
