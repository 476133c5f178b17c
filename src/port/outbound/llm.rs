//! LLM completion port.
//!
//! Defines the interface every hosted provider adapter implements so the
//! completion service can stay provider-agnostic.

use async_trait::async_trait;

use crate::domain::{Backend, CompletionRequest, CompletionResponse};
use crate::error::Result;

/// Client for a hosted chat-completion API.
///
/// Implementations own their HTTP client and credential, translate a
/// [`CompletionRequest`] into the provider's wire format, and extract the
/// single completion string from the reply.
///
/// # Errors
///
/// [`complete`](Self::complete) fails on transport errors, non-success HTTP
/// statuses, bodies that do not have the expected shape, and replies that
/// carry no completion text.
#[async_trait]
pub trait Llm: Send + Sync {
    /// The provider this client talks to.
    fn backend(&self) -> Backend;

    /// Send one completion request. Never retried.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}
