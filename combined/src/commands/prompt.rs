//! Prompt command - Interactive password form.

use std::io;

use common::{AppResult, FormConfig};
use form_lib::{FormOutcome, PasswordForm};
use submission_service_lib::{random_source, SubmissionHandler, ToastNotifier};

use super::CommandStatus;

/// Execute the prompt command
pub fn execute(config: &FormConfig) -> AppResult<CommandStatus> {
    let mut handler = SubmissionHandler::new(
        random_source(config.seed),
        ToastNotifier::new(io::stdout()),
    );
    let mut form = PasswordForm::new(io::stdin().lock(), io::stdout());

    match form.run(&mut handler)? {
        FormOutcome::Submitted(outcome) => tracing::info!(%outcome, "Password form submitted"),
        FormOutcome::Abandoned => tracing::info!("Password form closed"),
    }

    Ok(CommandStatus::Success)
}
