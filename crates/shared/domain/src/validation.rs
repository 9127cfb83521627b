//! Password form validation.
//!
//! Both fields are checked independently and every failing rule is kept,
//! in rule order. The form displays the first error of each field.

use std::borrow::Cow;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::constants::{
    FIELD_CONFIRM_PASSWORD, FIELD_PASSWORD, MIN_PASSWORD_LENGTH, MSG_CONFIRM_REQUIRED,
    MSG_PASSWORDS_MISMATCH, MSG_PASSWORD_REQUIRED, MSG_PASSWORD_TOO_SHORT, MSG_PASSWORD_WEAK,
    PASSWORD_SYMBOLS,
};
use crate::error::ValidationErrorKind;
use crate::password::PasswordInput;

static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").expect("static regex"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").expect("static regex"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("static regex"));
static SYMBOL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[{}]", regex::escape(PASSWORD_SYMBOLS))).expect("static regex")
});

/// Form field that can carry validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in display order
    pub const ALL: [Field; 2] = [Field::Password, Field::ConfirmPassword];

    /// Field name as used in validation output
    pub fn name(&self) -> &'static str {
        match self {
            Field::Password => FIELD_PASSWORD,
            Field::ConfirmPassword => FIELD_CONFIRM_PASSWORD,
        }
    }

    /// Human-readable label rendered next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// User-facing message for a rule violated by this field
    pub fn message(&self, kind: ValidationErrorKind) -> &'static str {
        match (self, kind) {
            (Field::Password, ValidationErrorKind::Required) => MSG_PASSWORD_REQUIRED,
            (Field::ConfirmPassword, ValidationErrorKind::Required) => MSG_CONFIRM_REQUIRED,
            (_, ValidationErrorKind::TooShort) => MSG_PASSWORD_TOO_SHORT,
            (_, ValidationErrorKind::WeakPassword) => MSG_PASSWORD_WEAK,
            (_, ValidationErrorKind::Mismatch) => MSG_PASSWORDS_MISMATCH,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field validation errors.
///
/// A field appears only when it is invalid, and then with at least one error.
/// Built only through `add`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, Vec<ValidationErrorKind>>,
}

impl ValidationResult {
    /// True when no field has errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a rule violation for a field
    pub fn add(&mut self, field: Field, kind: ValidationErrorKind) {
        let kinds = self.errors.entry(field).or_default();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    /// Errors of a field, empty when the field is valid
    pub fn errors(&self, field: Field) -> &[ValidationErrorKind] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a field reported a specific rule violation
    pub fn contains(&self, field: Field, kind: ValidationErrorKind) -> bool {
        self.errors(field).contains(&kind)
    }

    /// Whether a field is invalid
    pub fn has_errors(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Message displayed for a field (its first error)
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors(field).first().map(|kind| field.message(*kind))
    }

    /// Invalid fields with their errors, in display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &[ValidationErrorKind])> {
        self.errors.iter().map(|(field, kinds)| (*field, kinds.as_slice()))
    }

    /// Number of invalid fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl From<&ValidationResult> for ValidationErrors {
    fn from(result: &ValidationResult) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, kinds) in result.iter() {
            for kind in kinds {
                let mut error = ValidationError::new(kind.code());
                error.message = Some(Cow::Borrowed(field.message(*kind)));
                errors.add(field.name(), error);
            }
        }
        errors
    }
}

/// Validate a password/confirmation pair.
pub fn validate(input: &PasswordInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    for kind in password_errors(&input.password) {
        result.add(Field::Password, kind);
    }
    for kind in confirmation_errors(&input.password, &input.confirm_password) {
        result.add(Field::ConfirmPassword, kind);
    }

    result
}

fn password_errors(password: &str) -> Vec<ValidationErrorKind> {
    let mut kinds = Vec::new();
    if password.is_empty() {
        kinds.push(ValidationErrorKind::Required);
    }
    if password_length(password) < MIN_PASSWORD_LENGTH {
        kinds.push(ValidationErrorKind::TooShort);
    }
    if !is_strong(password) {
        kinds.push(ValidationErrorKind::WeakPassword);
    }
    kinds
}

fn confirmation_errors(password: &str, confirmation: &str) -> Vec<ValidationErrorKind> {
    let mut kinds = Vec::new();
    if confirmation.is_empty() {
        kinds.push(ValidationErrorKind::Required);
    }
    if confirmation.as_bytes() != password.as_bytes() {
        kinds.push(ValidationErrorKind::Mismatch);
    }
    kinds
}

/// Password length in UTF-16 code units, the unit browser forms count in.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Complexity rule: lowercase, uppercase, digit and symbol all present.
///
/// Only the first line is searched, so a class that appears after a line
/// terminator does not count.
pub fn is_strong(password: &str) -> bool {
    let line = first_line(password);
    LOWERCASE.is_match(line)
        && UPPERCASE.is_match(line)
        && DIGIT.is_match(line)
        && SYMBOL.is_match(line)
}

fn first_line(password: &str) -> &str {
    password
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .next()
        .unwrap_or_default()
}
