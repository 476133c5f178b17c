use std::process::ExitCode;

use clap::Parser;
use shell_complete::adapter::inbound::cli::command::CompleteCli;
use shell_complete::adapter::inbound::cli::complete;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = CompleteCli::parse();
    match complete::execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
