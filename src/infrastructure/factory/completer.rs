//! Completion service factory.

use tracing::debug;

use super::llm::build_llm_client;
use crate::application::completion::{Completer, ModelProfile};
use crate::domain::Backend;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;

/// Build a [`Completer`] with every backend registered.
///
/// Backends without a key are registered without a client so that calls to
/// them report the missing credential instead of reaching the network.
#[must_use]
pub fn build_completer(config: &Config, credentials: &Credentials) -> Completer {
    let mut completer = Completer::new(config.prompt.style);

    for backend in Backend::ALL {
        let profile = ModelProfile {
            model: config.llm.model(backend).to_string(),
            sampling: config.llm.sampling(backend),
        };
        let client = match build_llm_client(backend, &config.llm, credentials) {
            Ok(client) => Some(client),
            Err(e) => {
                debug!(provider = %backend, reason = %e, "backend unavailable");
                None
            }
        };
        completer.register(backend, profile, client);
    }

    completer
}
