//! Toast notifications.

use std::io::Write;

use common::AppResult;
use domain::{Toast, ToastLevel};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Sink for user-visible notifications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Notifier {
    /// Show a toast to the user
    fn notify(&mut self, toast: &Toast) -> AppResult<()>;
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, toast: &Toast) -> AppResult<()> {
        (**self).notify(toast)
    }
}

/// Renders toasts as single lines on a writer (usually stdout).
#[derive(Debug)]
pub struct ToastNotifier<W> {
    out: W,
}

impl<W: Write> ToastNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the notifier and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ToastNotifier<W> {
    fn notify(&mut self, toast: &Toast) -> AppResult<()> {
        let icon = match toast.level {
            ToastLevel::Success => "✔",
            ToastLevel::Error => "✖",
        };
        writeln!(self.out, "{} {}", icon, toast.message)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Discards every toast (batch simulation).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _toast: &Toast) -> AppResult<()> {
        Ok(())
    }
}
