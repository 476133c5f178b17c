//! shell-complete - complete shell commands with a hosted LLM.
//!
//! Joins a partial or natural-language command into a prompt, sends it to
//! Anthropic or Cerebras, and returns the first completion.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Backends, prompts, completion requests and responses
//! - [`port`] - The [`Llm`](port::outbound::llm::Llm) trait
//! - [`adapter`] - Provider clients (outbound) and the CLI (inbound)
//! - [`application`] - The completion service and the self-test runner
//! - [`infrastructure`] - Configuration, credentials, logging and factories
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use shell_complete::domain::Backend;
//! use shell_complete::infrastructure::config::credentials::Credentials;
//! use shell_complete::infrastructure::config::settings::Config;
//! use shell_complete::infrastructure::factory::completer::build_completer;
//!
//! # async fn run() {
//! let config = Config::default();
//! let credentials = Credentials::from_env();
//! let completer = build_completer(&config, &credentials);
//! let command = completer.complete(Backend::Anthropic, "find all pdf files").await;
//! println!("{command}");
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
