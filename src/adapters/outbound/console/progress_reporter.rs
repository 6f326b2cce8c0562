use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// Spinner redraw interval
const SPINNER_TICK: Duration = Duration::from_millis(100);

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Long-running steps are shown with an indicatif spinner.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn start_step(&self, message: &str) {
        self.clear_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn finish_step(&self) {
        self.clear_spinner();
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.start_step("Resolving");
        reporter.finish_step();
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_finish_without_start_is_noop() {
        let reporter = StderrProgressReporter::default();
        reporter.finish_step();
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_error_clears_running_step() {
        let reporter = StderrProgressReporter::new();
        reporter.start_step("Resolving");
        assert!(reporter.spinner.borrow().is_some());
        reporter.report_error("failed");
        assert!(reporter.spinner.borrow().is_none());
    }
}
