//! Unified application error handling.
//!
//! Field validation failures are not errors at this level: they are rendered
//! inline by the form. `AppError` covers everything that aborts a command.

use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Terminal input/output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Output encoding
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get error code for logs and machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for user-correctable errors
            AppError::Config(msg) => msg.clone(),

            // Hide details for the rest
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "Could not read or write the terminal".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Could not encode the output".to_string()
            }
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
