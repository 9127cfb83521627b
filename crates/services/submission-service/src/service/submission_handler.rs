//! Submission handler - Simulated server call for a validated password.
//!
//! Nothing leaves the process: the outcome is a coin flip drawn from the
//! random source, and the only side effect is the toast.

use tracing::{debug, info};

use crate::notifier::Notifier;
use crate::random::RandomSource;
use common::AppResult;
use domain::{SubmissionOutcome, ValidatedPassword};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Submission service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SubmissionService {
    /// Submit a validated password and notify the user of the outcome.
    fn submit(&mut self, password: &ValidatedPassword) -> AppResult<SubmissionOutcome>;
}

/// Concrete implementation of SubmissionService.
pub struct SubmissionHandler<R, N> {
    random: R,
    notifier: N,
}

impl<R, N> SubmissionHandler<R, N>
where
    R: RandomSource,
    N: Notifier,
{
    /// Create new submission handler
    pub fn new(random: R, notifier: N) -> Self {
        Self { random, notifier }
    }

    /// Consume the handler and return its parts
    pub fn into_parts(self) -> (R, N) {
        (self.random, self.notifier)
    }

    /// Submit the same password `runs` times and count the outcomes.
    pub fn simulate(&mut self, password: &ValidatedPassword, runs: u32) -> AppResult<Tally> {
        let mut tally = Tally::default();
        for _ in 0..runs {
            tally.record(self.submit(password)?);
        }
        info!(
            runs,
            success = tally.success,
            failure = tally.failure,
            "Simulation finished"
        );
        Ok(tally)
    }
}

impl<R, N> SubmissionService for SubmissionHandler<R, N>
where
    R: RandomSource,
    N: Notifier,
{
    fn submit(&mut self, password: &ValidatedPassword) -> AppResult<SubmissionOutcome> {
        // Log the length only, never the password
        debug!(length = password.len(), "Password submitted");

        let outcome = SubmissionOutcome::from_sample(self.random.next_unit());
        debug!(%outcome, "Simulated server response");

        self.notifier.notify(&outcome.toast())?;
        Ok(outcome)
    }
}

/// Outcome counts of a batch of submissions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub success: u32,
    pub failure: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => self.success += 1,
            SubmissionOutcome::Failure => self.failure += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.success + self.failure
    }

    /// Share of successful submissions, 0 for an empty tally
    pub fn success_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.success) / f64::from(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;

    use super::*;
    use crate::notifier::{MockNotifier, NullNotifier};
    use crate::random::{MockRandomSource, SeededRandom, ThreadRandom};
    use domain::{PasswordInput, ToastLevel, MSG_SUBMIT_FAILURE, MSG_SUBMIT_SUCCESS};

    fn valid_password() -> ValidatedPassword {
        PasswordInput::new("Abc123!", "Abc123!")
            .into_validated()
            .unwrap()
    }

    fn fixed_random(sample: f64) -> MockRandomSource {
        let mut random = MockRandomSource::new();
        random.expect_next_unit().times(1).return_const(sample);
        random
    }

    #[test]
    fn test_low_sample_succeeds_with_success_toast() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(function(|toast: &domain::Toast| {
                toast.level == ToastLevel::Success && toast.message == MSG_SUBMIT_SUCCESS
            }))
            .times(1)
            .returning(|_| Ok(()));

        let mut handler = SubmissionHandler::new(fixed_random(0.1), notifier);
        let outcome = handler.submit(&valid_password()).unwrap();

        assert_eq!(outcome, SubmissionOutcome::Success);
    }

    #[test]
    fn test_high_sample_fails_with_error_toast() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(function(|toast: &domain::Toast| {
                toast.level == ToastLevel::Error && toast.message == MSG_SUBMIT_FAILURE
            }))
            .times(1)
            .returning(|_| Ok(()));

        let mut handler = SubmissionHandler::new(fixed_random(0.9), notifier);
        let outcome = handler.submit(&valid_password()).unwrap();

        assert_eq!(outcome, SubmissionOutcome::Failure);
    }

    #[test]
    fn test_notifier_error_propagates() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(1).returning(|_| {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        });

        let mut handler = SubmissionHandler::new(fixed_random(0.1), notifier);
        assert!(handler.submit(&valid_password()).is_err());
    }

    #[test]
    fn test_seeded_thousand_runs_are_balanced() {
        let mut handler = SubmissionHandler::new(SeededRandom::new(42), NullNotifier);
        let tally = handler.simulate(&valid_password(), 1000).unwrap();

        assert_eq!(tally.total(), 1000);
        // 4 standard deviations for n = 1000 is about 0.063
        assert!((tally.success_ratio() - 0.5).abs() < 0.1, "{tally:?}");
    }

    #[test]
    fn test_thread_random_thousand_runs_are_balanced() {
        let mut handler = SubmissionHandler::new(ThreadRandom, NullNotifier);
        let tally = handler.simulate(&valid_password(), 1000).unwrap();

        assert!((tally.success_ratio() - 0.5).abs() < 0.1, "{tally:?}");
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let mut a = SubmissionHandler::new(SeededRandom::new(3), NullNotifier);
        let mut b = SubmissionHandler::new(SeededRandom::new(3), NullNotifier);
        let password = valid_password();

        for _ in 0..20 {
            assert_eq!(
                a.submit(&password).unwrap(),
                b.submit(&password).unwrap()
            );
        }
    }

    #[test]
    fn test_one_toast_per_submission() {
        let mut random = MockRandomSource::new();
        let mut samples = [0.2, 0.7, 0.4].into_iter();
        random
            .expect_next_unit()
            .times(3)
            .returning(move || samples.next().unwrap_or(0.0));

        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(3).returning(|_| Ok(()));

        let mut handler = SubmissionHandler::new(random, notifier);
        let tally = handler.simulate(&valid_password(), 3).unwrap();

        assert_eq!(tally, Tally { success: 2, failure: 1 });
    }

    #[test]
    fn test_empty_tally_ratio() {
        assert_eq!(Tally::default().success_ratio(), 0.0);
    }
}
