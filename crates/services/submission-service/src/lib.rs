//! Submission Service Library
//!
//! Simulates sending a validated password to a server: the outcome is drawn
//! at random and reported to the user through a notifier.

pub mod notifier;
pub mod random;
pub mod service;

pub use notifier::{Notifier, NullNotifier, ToastNotifier};
pub use random::{random_source, RandomSource, SeededRandom, ThreadRandom};
pub use service::{SubmissionHandler, SubmissionService, Tally};

#[cfg(any(test, feature = "test-utils"))]
pub use notifier::MockNotifier;
#[cfg(any(test, feature = "test-utils"))]
pub use random::MockRandomSource;
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockSubmissionService;
