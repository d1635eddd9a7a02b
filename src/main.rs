//! autocomplete: print autocomplete suggestions from a public endpoint
//!
//! This is the main entry point for the application.

mod cli;

use anyhow::Result;
use autocomplete_cli::{config, Suggester};
use clap::Parser;
use cli::Cli;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, on stdout
            if e.print().is_err() {
                eprintln!("{}", e);
            }
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    debug!("autocomplete v{}", autocomplete_cli::VERSION);

    let settings = config::load(cli.config.as_deref())?;
    let suggester = Suggester::from_settings(&settings)?;

    let (source, query, options) = cli.command.into_request();
    let result = suggester.handle_command(&query, &options, source).await;

    if !result.success {
        eprintln!("Error: {}", result.error.unwrap_or_default());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging on stderr; RUST_LOG overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
