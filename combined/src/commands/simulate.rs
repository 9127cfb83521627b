//! Simulate command - Batch submissions to inspect the outcome ratio.

use std::io::Write;

use serde::Serialize;

use common::{AppResult, FormConfig, OutputFormat};
use domain::PasswordInput;
use form_lib::{write_errors, write_json, SubmitReport};
use submission_service_lib::{random_source, NullNotifier, SubmissionHandler, Tally};

use super::CommandStatus;
use crate::cli::SimulateArgs;

#[derive(Debug, Serialize)]
struct SimulationReport {
    runs: u32,
    success: u32,
    failure: u32,
    success_ratio: f64,
}

impl From<Tally> for SimulationReport {
    fn from(tally: Tally) -> Self {
        Self {
            runs: tally.total(),
            success: tally.success,
            failure: tally.failure,
            success_ratio: tally.success_ratio(),
        }
    }
}

/// Execute the simulate command
pub fn execute<W: Write>(
    args: SimulateArgs,
    config: &FormConfig,
    out: &mut W,
) -> AppResult<CommandStatus> {
    let input = PasswordInput::new(args.password.clone(), args.password);
    let password = match input.into_validated() {
        Ok(password) => password,
        Err(errors) => {
            match config.format {
                OutputFormat::Text => write_errors(out, &errors)?,
                OutputFormat::Json => write_json(out, &SubmitReport::Invalid { errors })?,
            }
            return Ok(CommandStatus::InvalidInput);
        }
    };

    let mut handler = SubmissionHandler::new(random_source(config.seed), NullNotifier);
    let report = SimulationReport::from(handler.simulate(&password, args.runs)?);

    match config.format {
        OutputFormat::Text => {
            writeln!(out, "runs:    {}", report.runs)?;
            writeln!(out, "success: {}", report.success)?;
            writeln!(out, "failure: {}", report.failure)?;
            writeln!(out, "ratio:   {:.3}", report.success_ratio)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(CommandStatus::Success)
}
