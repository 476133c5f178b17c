//! `llm-selftest` entry point.

use std::process::ExitCode;

use super::command::SelfTestCli;
use super::{output, paths};
use crate::application::selftest::{self, SAMPLES};
use crate::domain::Backend;
use crate::error::Result;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::completer::build_completer;

/// Run the sample prompts against every backend with a key.
///
/// Exits 1 when no key is set or any backend returns an empty completion.
///
/// # Errors
///
/// Returns an error only when the config file cannot be loaded.
pub async fn execute(cli: SelfTestCli) -> Result<ExitCode> {
    output::configure(cli.color);

    let config = Config::resolve(cli.config.as_deref(), &paths::default_config())?;
    config.init_logging(cli.verbose);

    let credentials = Credentials::from_env();
    let backends = credentials.available();
    if backends.is_empty() {
        output::error(&format!(
            "Neither {} nor {} is set",
            Backend::Anthropic.credential_var(),
            Backend::Cerebras.credential_var()
        ));
        return Ok(ExitCode::from(1));
    }

    let completer = build_completer(&config, &credentials);
    let mut current: Option<Backend> = None;
    let mut index = 0;

    let report = selftest::run(&completer, &backends, |backend, case| {
        if current != Some(backend) {
            current = Some(backend);
            index = 0;
            let model = completer.model(backend).unwrap_or("unknown model");
            output::section(&format!("Testing {backend} ({model})"));
        }
        index += 1;
        output::line(format!("Test {index}: {}", case.sample.label));
        output::field("Input", format!("'{}'", case.sample.input));
        output::field("Result", &case.output);
        output::blank();
    })
    .await;

    for backend_report in &report.backends {
        let passed = backend_report
            .cases
            .iter()
            .filter(|c| c.passed())
            .count();
        let summary = format!(
            "{} tests {} ({passed}/{})",
            backend_report.backend,
            if backend_report.passed() { "passed" } else { "failed" },
            SAMPLES.len()
        );
        if backend_report.passed() {
            output::success(&summary);
        } else {
            output::failure(&summary);
        }
    }
    output::blank();

    if report.passed() {
        output::success("All tests passed!");
        Ok(ExitCode::SUCCESS)
    } else {
        output::failure("Some tests failed. Check API keys and connectivity.");
        Ok(ExitCode::from(1))
    }
}
