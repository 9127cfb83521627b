//! Terminal password form.
//!
//! Renders the two password fields, shows field errors inline and hands a
//! valid input to the submission service.

pub mod form;
pub mod render;

pub use form::{FormOutcome, PasswordForm};
pub use render::{format_validation_errors, write_errors, write_json, SubmitReport};
