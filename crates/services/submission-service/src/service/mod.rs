//! Submission services.

mod submission_handler;

pub use submission_handler::{SubmissionHandler, SubmissionService, Tally};

#[cfg(any(test, feature = "test-utils"))]
pub use submission_handler::MockSubmissionService;
