//! Submit command - One-shot validation and simulated submission.

use std::io::Write;

use common::{AppResult, FormConfig, OutputFormat};
use domain::PasswordInput;
use form_lib::{write_errors, write_json, SubmitReport};
use submission_service_lib::{
    random_source, NullNotifier, SubmissionHandler, SubmissionService, ToastNotifier,
};

use super::CommandStatus;
use crate::cli::SubmitArgs;

/// Execute the submit command
pub fn execute<W: Write>(
    args: SubmitArgs,
    config: &FormConfig,
    out: &mut W,
) -> AppResult<CommandStatus> {
    let input = PasswordInput::new(args.password, args.confirm_password);

    let password = match input.into_validated() {
        Ok(password) => password,
        Err(errors) => {
            tracing::info!(invalid_fields = errors.len(), "Submission rejected");
            match config.format {
                OutputFormat::Text => write_errors(out, &errors)?,
                OutputFormat::Json => write_json(out, &SubmitReport::Invalid { errors })?,
            }
            return Ok(CommandStatus::InvalidInput);
        }
    };

    let random = random_source(config.seed);
    let outcome = match config.format {
        OutputFormat::Text => {
            SubmissionHandler::new(random, ToastNotifier::new(&mut *out)).submit(&password)?
        }
        OutputFormat::Json => {
            let outcome = SubmissionHandler::new(random, NullNotifier).submit(&password)?;
            write_json(out, &SubmitReport::Submitted { outcome })?;
            outcome
        }
    };
    tracing::info!(%outcome, "Submission finished");

    Ok(CommandStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(password: &str, confirm: &str, format: OutputFormat) -> (CommandStatus, String) {
        let args = SubmitArgs {
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        };
        let config = FormConfig {
            seed: Some(1),
            format,
        };
        let mut out = Vec::new();
        let status = execute(args, &config, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_pair_prints_one_toast() {
        let (status, out) = run("Abc123!", "Abc123!", OutputFormat::Text);
        assert_eq!(status, CommandStatus::Success);
        assert!(
            out == "✔ Password submitted successfully!\n"
                || out == "✖ Failed to submit password. Please try again.\n",
            "unexpected output: {out:?}"
        );
    }

    #[test]
    fn test_mismatch_prints_inline_error() {
        let (status, out) = run("Abc123!", "Abc123?", OutputFormat::Text);
        assert_eq!(status, CommandStatus::InvalidInput);
        assert_eq!(out, "  Confirm Password: Passwords must match\n");
    }

    #[test]
    fn test_json_invalid_output() {
        let (status, out) = run("abc123", "abc123", OutputFormat::Json);
        assert_eq!(status, CommandStatus::InvalidInput);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "errors": { "password": ["weak_password"] } })
        );
    }

    #[test]
    fn test_json_submitted_output() {
        let (status, out) = run("Abc123!", "Abc123!", OutputFormat::Json);
        assert_eq!(status, CommandStatus::Success);

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let outcome = value["outcome"].as_str().unwrap();
        assert!(outcome == "success" || outcome == "failure");
    }

    #[test]
    fn test_same_seed_same_output() {
        let first = run("Abc123!", "Abc123!", OutputFormat::Text);
        let second = run("Abc123!", "Abc123!", OutputFormat::Text);
        assert_eq!(first, second);
    }
}
