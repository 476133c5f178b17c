//! Infrastructure configuration modules.

pub mod credentials;
pub mod llm;
pub mod logging;
pub mod settings;
