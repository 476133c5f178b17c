//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the completion service and the systems it
//! talks to. Adapters implement them; the application only sees the traits.
//!
//! ```text
//!            ┌────────────────────────┐
//!  CLI ────▶ │  Application + Domain  │ ────▶ Llm port ────▶ Anthropic
//!            └────────────────────────┘                  └──▶ Cerebras
//! ```

pub mod outbound;
