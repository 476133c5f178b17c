//! Provider-agnostic completion types.

mod backend;
mod completion;
mod prompt;

pub use backend::{Backend, ParseBackendError};
pub use completion::{CompletionRequest, CompletionResponse, ReasoningEffort, Sampling};
pub use prompt::{Prompt, PromptStyle};
