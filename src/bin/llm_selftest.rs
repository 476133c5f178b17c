use std::process::ExitCode;

use clap::Parser;
use shell_complete::adapter::inbound::cli::command::SelfTestCli;
use shell_complete::adapter::inbound::cli::{output, selftest};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = SelfTestCli::parse();
    match selftest::execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
