//! Simulated submission outcome and the toast it produces.

use serde::Serialize;

use crate::constants::{MSG_SUBMIT_FAILURE, MSG_SUBMIT_SUCCESS, SUCCESS_PROBABILITY};

/// Result of a simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success,
    Failure,
}

impl SubmissionOutcome {
    /// Pick the outcome for a uniform sample in `[0, 1)`.
    pub fn from_sample(sample: f64) -> Self {
        if sample < SUCCESS_PROBABILITY {
            SubmissionOutcome::Success
        } else {
            SubmissionOutcome::Failure
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// Notification shown for this outcome
    pub fn toast(&self) -> Toast {
        match self {
            SubmissionOutcome::Success => Toast::success(MSG_SUBMIT_SUCCESS),
            SubmissionOutcome::Failure => Toast::error(MSG_SUBMIT_FAILURE),
        }
    }
}

impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionOutcome::Success => write!(f, "success"),
            SubmissionOutcome::Failure => write!(f, "failure"),
        }
    }
}

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
}

/// Transient user notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: &'static str,
}

impl Toast {
    pub fn success(message: &'static str) -> Self {
        Self {
            level: ToastLevel::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            level: ToastLevel::Error,
            message,
        }
    }
}
