//! API credentials.
//!
//! Keys are read from the environment once, at startup, and handed to the
//! factory explicitly. Nothing below the CLI touches `std::env`.

use std::fmt;

use crate::domain::Backend;
use crate::error::{Error, Result};

/// API keys for every backend. Empty values count as missing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    anthropic: Option<String>,
    cerebras: Option<String>,
}

impl Credentials {
    /// Build from explicit values.
    #[must_use]
    pub fn new(anthropic: Option<String>, cerebras: Option<String>) -> Self {
        Self {
            anthropic: anthropic.filter(|k| !k.is_empty()),
            cerebras: cerebras.filter(|k| !k.is_empty()),
        }
    }

    /// Read `ANTHROPIC_API_KEY` and `CEREBRAS_API_KEY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read keys through an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            lookup(Backend::Anthropic.credential_var()),
            lookup(Backend::Cerebras.credential_var()),
        )
    }

    /// Key for `backend`, if present.
    #[must_use]
    pub fn get(&self, backend: Backend) -> Option<&str> {
        match backend {
            Backend::Anthropic => self.anthropic.as_deref(),
            Backend::Cerebras => self.cerebras.as_deref(),
        }
    }

    /// Key for `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialMissing`] naming the variable to set.
    pub fn require(&self, backend: Backend) -> Result<&str> {
        self.get(backend).ok_or(Error::CredentialMissing {
            var: backend.credential_var(),
        })
    }

    #[must_use]
    pub fn has(&self, backend: Backend) -> bool {
        self.get(backend).is_some()
    }

    /// Backends that have a key, in selection order.
    #[must_use]
    pub fn available(&self) -> Vec<Backend> {
        Backend::ALL.into_iter().filter(|b| self.has(*b)).collect()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |k: &Option<String>| k.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("anthropic", &mask(&self.anthropic))
            .field("cerebras", &mask(&self.cerebras))
            .finish()
    }
}
