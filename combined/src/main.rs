//! Password Entry - Application entry point
//!
//! CLI-based entry point that dispatches to the form commands.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use common::{FormConfig, Overrides};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration, command-line flags win over the environment
    let overrides = Overrides {
        seed: cli.seed,
        format: cli.format,
    };
    let config = match FormConfig::from_env_with(overrides) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(code = e.code(), "{}", e.user_message());
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let mut stdout = std::io::stdout();
    let result = match cli.command.unwrap_or(Commands::Prompt) {
        Commands::Prompt => commands::prompt::execute(&config),
        Commands::Submit(args) => commands::submit::execute(args, &config, &mut stdout),
        Commands::Simulate(args) => commands::simulate::execute(args, &config, &mut stdout),
    };

    // Handle errors
    match result {
        Ok(status) => status.into(),
        Err(e) => {
            tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing subscriber (logs go to stderr, the form owns stdout)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
