//! Application services (use cases).
//!
//! These services orchestrate domain logic and call outbound ports.

pub mod completion;
pub mod selftest;
