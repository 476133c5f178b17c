//! CLI module graph.

pub mod command;
pub mod complete;
pub mod output;
pub mod paths;
pub mod selftest;
