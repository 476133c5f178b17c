//! LLM client factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::llm::anthropic::Anthropic;
use crate::adapter::outbound::llm::cerebras::Cerebras;
use crate::domain::Backend;
use crate::error::Result;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::llm::LlmConfig;
use crate::port::outbound::llm::Llm;

/// Build the client for `backend`.
///
/// # Errors
///
/// Returns [`CredentialMissing`](crate::error::Error::CredentialMissing)
/// when the backend has no key. No client is created in that case.
pub fn build_llm_client(
    backend: Backend,
    config: &LlmConfig,
    credentials: &Credentials,
) -> Result<Arc<dyn Llm>> {
    let api_key = credentials.require(backend)?;
    let base_url = config.base_url(backend);

    let client: Arc<dyn Llm> = match backend {
        Backend::Anthropic => Arc::new(Anthropic::new(api_key).with_base_url(base_url)),
        Backend::Cerebras => Arc::new(Cerebras::new(api_key).with_base_url(base_url)),
    };

    info!(
        provider = %client.backend(),
        model = config.model(backend),
        "LLM client initialized"
    );
    Ok(client)
}
