//! Domain layer - Password form value objects and rules.
//!
//! This crate contains pure domain logic with no I/O: the password input,
//! its validation rules and the simulated submission outcome.

pub mod constants;
pub mod error;
pub mod password;
pub mod submission;
pub mod validation;

pub use constants::*;
pub use error::ValidationErrorKind;
pub use password::{PasswordInput, ValidatedPassword};
pub use submission::{SubmissionOutcome, Toast, ToastLevel};
pub use validation::{is_strong, password_length, validate, Field, ValidationResult};
