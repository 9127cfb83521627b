//! Output rendering for the form: inline field errors and JSON reports.

use std::io::Write;

use serde::Serialize;
use validator::ValidationErrors;

use common::AppResult;
use domain::{Field, SubmissionOutcome, ValidationResult};

/// Write the displayed message of every invalid field, one per line.
pub fn write_errors<W: Write>(out: &mut W, result: &ValidationResult) -> AppResult<()> {
    for field in Field::ALL {
        if let Some(message) = result.message(field) {
            writeln!(out, "  {}: {}", field.label(), message)?;
        }
    }
    Ok(())
}

/// Machine-readable result of a one-shot submission.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SubmitReport {
    Invalid { errors: ValidationResult },
    Submitted { outcome: SubmissionOutcome },
}

/// Write a report as a single JSON line.
pub fn write_json<W: Write>(out: &mut W, report: &SubmitReport) -> AppResult<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Format validation errors into a single log-friendly string
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| field.to_string());

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| format!("{}: {}", field, m))
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
