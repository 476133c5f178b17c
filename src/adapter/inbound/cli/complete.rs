//! `shell-complete` entry point.

use std::process::ExitCode;

use clap::CommandFactory;
use tracing::info;

use super::command::CompleteCli;
use super::paths;
use crate::error::Result;
use crate::infrastructure::config::credentials::Credentials;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::completer::build_completer;

/// Complete the command given on the command line and print it.
///
/// Prints nothing when the backend fails; the reason goes to the log.
///
/// # Errors
///
/// Returns an error only when the config file cannot be loaded.
pub async fn execute(cli: CompleteCli) -> Result<ExitCode> {
    let command_line = cli.command_line();
    if command_line.trim().is_empty() {
        eprintln!("{}", CompleteCli::command().render_usage());
        return Ok(ExitCode::from(1));
    }

    let config = Config::resolve(cli.config.as_deref(), &paths::default_config())?;
    config.init_logging(cli.verbose);

    let credentials = Credentials::from_env();
    let backend = config.select_backend(cli.backend, &credentials);
    info!(provider = %backend, "completing command");

    let completer = build_completer(&config, &credentials);
    let completion = completer.complete(backend, &command_line).await;
    if !completion.is_empty() {
        println!("{completion}");
    }

    Ok(ExitCode::SUCCESS)
}
