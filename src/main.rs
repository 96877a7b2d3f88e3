// src/main.rs
//
// onforkhub run <command> [json-payload] | commands | stats
//
// Prints the subcommand's output. Exits non-zero unless it succeeded.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use onforkhub::cli::{execute, Cli};
use onforkhub::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("failed to load configuration")?;

    let output = execute(cli.command, &config).await?;
    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
