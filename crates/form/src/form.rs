//! Interactive password form.

use std::io::{BufRead, Write};

use tracing::{debug, info};
use validator::ValidationErrors;

use common::AppResult;
use domain::{Field, PasswordInput, SubmissionOutcome, FORM_TITLE};
use submission_service_lib::SubmissionService;

use crate::render::{format_validation_errors, write_errors};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// A valid input was submitted
    Submitted(SubmissionOutcome),
    /// Input ended before a valid submission
    Abandoned,
}

/// Password form reading from `input` and rendering to `output`.
pub struct PasswordForm<I, O> {
    input: I,
    output: O,
}

impl<I, O> PasswordForm<I, O>
where
    I: BufRead,
    O: Write,
{
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consume the form and return the output sink
    pub fn into_output(self) -> O {
        self.output
    }

    /// Prompt until a valid input is entered, then submit it once.
    ///
    /// Invalid attempts render their field errors and never reach `service`.
    pub fn run(&mut self, service: &mut dyn SubmissionService) -> AppResult<FormOutcome> {
        writeln!(self.output, "{}", FORM_TITLE)?;
        writeln!(self.output)?;

        let mut attempt = 0u32;
        loop {
            let Some(input) = self.read_input()? else {
                info!(attempts = attempt, "Form closed without a valid submission");
                return Ok(FormOutcome::Abandoned);
            };
            attempt += 1;

            match input.into_validated() {
                Ok(password) => {
                    let outcome = service.submit(&password)?;
                    writeln!(self.output)?;
                    return Ok(FormOutcome::Submitted(outcome));
                }
                Err(result) => {
                    debug!(
                        attempt,
                        errors = %format_validation_errors(&ValidationErrors::from(&result)),
                        "Form rejected"
                    );
                    write_errors(&mut self.output, &result)?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Read one password/confirmation pair, `None` at end of input.
    pub fn read_input(&mut self) -> AppResult<Option<PasswordInput>> {
        let Some(password) = self.prompt(Field::Password)? else {
            return Ok(None);
        };
        let Some(confirm_password) = self.prompt(Field::ConfirmPassword)? else {
            return Ok(None);
        };
        Ok(Some(PasswordInput::new(password, confirm_password)))
    }

    fn prompt(&mut self, field: Field) -> AppResult<Option<String>> {
        write!(self.output, "{}: ", field.label())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// Remove the trailing newline only; spaces are part of the password.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use submission_service_lib::MockSubmissionService;

    fn form(input: &str) -> PasswordForm<Cursor<Vec<u8>>, Vec<u8>> {
        PasswordForm::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_strip_line_ending_keeps_spaces() {
        assert_eq!(strip_line_ending("Ab 1!x \r\n".to_string()), "Ab 1!x ");
        assert_eq!(strip_line_ending("Abc123!\n".to_string()), "Abc123!");
        assert_eq!(strip_line_ending("Abc123!".to_string()), "Abc123!");
    }

    #[test]
    fn test_read_input_pairs_lines() {
        let mut form = form("Abc123!\nAbc123?\n");
        let input = form.read_input().unwrap().unwrap();
        assert_eq!(input, PasswordInput::new("Abc123!", "Abc123?"));
        assert!(form.read_input().unwrap().is_none());
    }

    #[test]
    fn test_valid_input_is_submitted_once() {
        let mut service = MockSubmissionService::new();
        service
            .expect_submit()
            .times(1)
            .returning(|_| Ok(SubmissionOutcome::Success));

        let mut form = form("Abc123!\nAbc123!\n");
        let outcome = form.run(&mut service).unwrap();

        assert_eq!(outcome, FormOutcome::Submitted(SubmissionOutcome::Success));
        let out = String::from_utf8(form.into_output()).unwrap();
        assert!(out.starts_with("Password Entry\n"));
    }

    #[test]
    fn test_invalid_input_never_submits() {
        let mut service = MockSubmissionService::new();
        service.expect_submit().times(0);

        let mut form = form("abc123\nabc123\n");
        let outcome = form.run(&mut service).unwrap();

        assert_eq!(outcome, FormOutcome::Abandoned);
        let out = String::from_utf8(form.into_output()).unwrap();
        assert!(out.contains("  Password: Password must meet the requirements\n"));
        assert!(!out.contains("Confirm Password: Passwords must match"));
    }

    #[test]
    fn test_reprompts_after_errors_then_submits() {
        let mut service = MockSubmissionService::new();
        service
            .expect_submit()
            .times(1)
            .returning(|password| {
                assert_eq!(password.as_str(), "Abc123!");
                Ok(SubmissionOutcome::Failure)
            });

        let mut form = form("Abc123!\nAbc123?\nAbc123!\nAbc123!\n");
        let outcome = form.run(&mut service).unwrap();

        assert_eq!(outcome, FormOutcome::Submitted(SubmissionOutcome::Failure));
        let out = String::from_utf8(form.into_output()).unwrap();
        assert!(out.contains("  Confirm Password: Passwords must match\n"));
        assert_eq!(out.matches("Password: ").count(), 5);
    }

    #[test]
    fn test_end_of_input_mid_form_abandons() {
        let mut service = MockSubmissionService::new();
        service.expect_submit().times(0);

        let mut form = form("Abc123!\n");
        assert_eq!(form.run(&mut service).unwrap(), FormOutcome::Abandoned);
    }
}
