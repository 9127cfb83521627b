//! Password input value objects.
//!
//! `PasswordInput` is the raw pair typed into the form. `ValidatedPassword`
//! can only be obtained from an input that passed validation, so the
//! submission side never sees an unchecked password.

use validator::{Validate, ValidationErrors};

use crate::validation::{self, password_length, ValidationResult};

/// Password and confirmation as submitted by the user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordInput {
    pub password: String,
    pub confirm_password: String,
}

// Don't expose passwords in debug output (security)
impl std::fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordInput")
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordInput {
    pub fn new(password: impl Into<String>, confirm_password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Run every field rule and collect the errors.
    pub fn check(&self) -> ValidationResult {
        validation::validate(self)
    }

    /// Consume the input, keeping the password only if it is valid.
    ///
    /// # Errors
    /// Returns the per-field errors when any rule fails.
    pub fn into_validated(self) -> Result<ValidatedPassword, ValidationResult> {
        let result = self.check();
        if result.is_valid() {
            Ok(ValidatedPassword {
                password: self.password,
            })
        } else {
            Err(result)
        }
    }
}

impl Validate for PasswordInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let result = self.check();
        if result.is_valid() {
            Ok(())
        } else {
            Err(ValidationErrors::from(&result))
        }
    }
}

/// A password that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedPassword {
    password: String,
}

impl std::fmt::Debug for ValidatedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedPassword")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ValidatedPassword {
    /// Get the password text.
    pub fn as_str(&self) -> &str {
        &self.password
    }

    /// Length as counted by the length rule (safe to log).
    pub fn len(&self) -> usize {
        password_length(&self.password)
    }

    /// Always false: validated passwords are never empty.
    pub fn is_empty(&self) -> bool {
        self.password.is_empty()
    }
}
