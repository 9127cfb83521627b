//! Domain-level errors.
//!
//! `ValidationErrorKind` is the closed set of rule violations a form field can
//! report.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{CODE_MISMATCH, CODE_REQUIRED, CODE_TOO_SHORT, CODE_WEAK_PASSWORD};

/// Rule violated by a single form field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Field left empty
    #[error("value is required")]
    Required,

    /// Password shorter than the minimum length
    #[error("value is too short")]
    TooShort,

    /// Password lacks a lowercase letter, uppercase letter, digit or symbol
    #[error("password is too weak")]
    WeakPassword,

    /// Confirmation differs from the password
    #[error("values do not match")]
    Mismatch,
}

impl ValidationErrorKind {
    /// Stable code used in `validator::ValidationError::code`
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::Required => CODE_REQUIRED,
            ValidationErrorKind::TooShort => CODE_TOO_SHORT,
            ValidationErrorKind::WeakPassword => CODE_WEAK_PASSWORD,
            ValidationErrorKind::Mismatch => CODE_MISMATCH,
        }
    }
}
