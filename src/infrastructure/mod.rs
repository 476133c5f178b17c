//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! completion logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading, credentials and logging
//! - [`factory`] - Component factory functions

pub mod config;
pub mod factory;
