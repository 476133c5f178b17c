//! Factory modules for building infrastructure components.
//!
//! Factories turn configuration plus credentials into fully wired components.
//!
//! # Submodules
//!
//! - [`llm`] - LLM client construction
//! - [`completer`] - Completion service construction

pub mod completer;
pub mod llm;
