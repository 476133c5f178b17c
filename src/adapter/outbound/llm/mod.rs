//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait
//! for the Anthropic Messages API and the OpenAI-compatible Cerebras API.

pub mod anthropic;
pub mod cerebras;
#[cfg(test)]
pub mod mock;

/// Pull a human-readable message out of a provider error body.
///
/// Both providers answer failures with `{"error": {"message": "..."}}`.
/// Falls back to the raw body when that shape is absent.
pub(crate) fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Envelope {
        error: Detail,
    }

    #[derive(serde::Deserialize)]
    struct Detail {
        message: String,
    }

    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}
