//! adc command-line application
//!
//! Keeps several Google credential files side by side and points tools at
//! one of them through GOOGLE_APPLICATION_CREDENTIALS.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/adc-cli
//! ```
//!
//! # Typical use
//!
//! ```bash
//! adc add ~/Downloads/ci-runner-0123456789ab.json
//! adc list
//! eval "$(adc env 0123)"
//! adc exec 0123 -- terraform plan
//! ```

mod args;
mod commands;
mod console;
mod router;

use crate::args::Cli;
use crate::console::CliConsole;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise quiet unless --verbose.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let console = CliConsole::new(cli.verbose);
    match router::route(cli, &console).await {
        Ok(code) => code,
        Err(e) => {
            console.error(&e);
            ExitCode::FAILURE
        }
    }
}
