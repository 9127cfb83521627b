//! Domain-level constants.
//!
//! These constants define the password rules and the fixed texts shown by the form.

// =============================================================================
// Fields
// =============================================================================

/// Field name of the password input
pub const FIELD_PASSWORD: &str = "password";

/// Field name of the confirmation input
pub const FIELD_CONFIRM_PASSWORD: &str = "confirmPassword";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in UTF-16 code units)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Symbols accepted by the complexity rule (at least one is required)
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-={[}]|:;\"'<,>.";

/// Validation error codes, as carried by `validator::ValidationError::code`
pub const CODE_REQUIRED: &str = "required";
pub const CODE_TOO_SHORT: &str = "too_short";
pub const CODE_WEAK_PASSWORD: &str = "weak_password";
pub const CODE_MISMATCH: &str = "mismatch";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const MSG_PASSWORD_WEAK: &str = "Password must meet the requirements";
pub const MSG_CONFIRM_REQUIRED: &str = "Confirm password is required";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords must match";

// =============================================================================
// Submission
// =============================================================================

/// Probability that a simulated submission succeeds
pub const SUCCESS_PROBABILITY: f64 = 0.5;

/// Toast shown when the simulated submission succeeds
pub const MSG_SUBMIT_SUCCESS: &str = "Password submitted successfully!";

/// Toast shown when the simulated submission fails
pub const MSG_SUBMIT_FAILURE: &str = "Failed to submit password. Please try again.";

/// Title rendered above the form
pub const FORM_TITLE: &str = "Password Entry";
