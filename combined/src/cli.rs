//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use common::{OutputFormat, DEFAULT_SIMULATION_RUNS};

/// Password Entry - Validate a password and simulate submitting it
#[derive(Parser, Debug)]
#[command(name = "password-entry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Seed for the simulated server response (overrides PASSWORD_ENTRY_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Output format: text or json (overrides PASSWORD_ENTRY_FORMAT)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Defaults to the interactive form
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the interactive password form
    Prompt,

    /// Validate and submit a password pair in one shot
    Submit(SubmitArgs),

    /// Submit a valid password many times and report the outcome ratio
    Simulate(SimulateArgs),
}

/// Arguments for the submit command
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Password to submit
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Confirmation of the password
    #[arg(short, long, default_value = "")]
    pub confirm_password: String,
}

/// Arguments for the simulate command
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Number of submissions
    #[arg(short, long, default_value_t = DEFAULT_SIMULATION_RUNS, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// Password submitted on every run (must be valid)
    #[arg(short, long, default_value = "Abc123!")]
    pub password: String,
}
