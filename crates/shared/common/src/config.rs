//! Form configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Seed for the simulated submission outcome
pub const ENV_SEED: &str = "PASSWORD_ENTRY_SEED";

/// Output format of one-shot commands (`text` or `json`)
pub const ENV_FORMAT: &str = "PASSWORD_ENTRY_FORMAT";

/// Default number of runs of the `simulate` command
pub const DEFAULT_SIMULATION_RUNS: u32 = 1000;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Inline field errors and toasts, as the form renders them
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Fixed seed for a reproducible outcome sequence, `None` for entropy
    pub seed: Option<u64>,
    /// Output format of one-shot commands
    pub format: OutputFormat,
}

impl FormConfig {
    /// Load configuration from `.env` and environment variables, with
    /// command-line values winning over the environment.
    ///
    /// An overridden variable is never parsed, so a bad value there is ignored.
    ///
    /// # Errors
    /// Returns a config error if a variable is set to an unparsable value.
    pub fn from_env_with(overrides: Overrides) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup_with(|key| env::var(key).ok(), overrides)
    }

    /// Build configuration from an arbitrary variable lookup plus overrides.
    pub fn from_lookup_with<F>(lookup: F, overrides: Overrides) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match (overrides.seed, lookup(ENV_SEED)) {
            (Some(seed), _) => Some(seed),
            (None, Some(raw)) => Some(raw.trim().parse::<u64>().map_err(|e| {
                AppError::config(format!("{} must be an unsigned integer: {}", ENV_SEED, e))
            })?),
            (None, None) => None,
        };

        let format = match (overrides.format, lookup(ENV_FORMAT)) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self { seed, format })
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
}
