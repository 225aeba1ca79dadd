use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "   {spinner:.green} {pos} package(s) resolved - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing diagnostics
/// to stderr so they never mix with the tree printed on stdout.
/// Uses an indicatif spinner that counts resolved packages.
pub struct StderrProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> Option<ProgressBar> {
        let mut slot = self.spinner.lock().ok()?;
        if let Some(spinner) = slot.as_ref() {
            return Some(spinner.clone());
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(120));
        *slot = Some(spinner.clone());
        Some(spinner)
    }

    fn current_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|slot| slot.clone())
    }

    /// Prints a line without tearing an active spinner
    fn print_line(&self, message: &str) {
        match self.current_spinner() {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn finish_spinner(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(spinner) = slot.take() {
                spinner.finish_and_clear();
            }
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
        self.print_line(message);
    }

    fn report_package(&self, name: &str) {
        if let Some(spinner) = self.get_or_create_spinner() {
            spinner.inc(1);
            spinner.set_message(name.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print_line(message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }
}

/// QuietProgressReporter adapter that discards every diagnostic
///
/// Default reporter: without `--verbose` the tool writes nothing but the
/// rendered trees.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietProgressReporter;

impl QuietProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for QuietProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_package(&self, _name: &str) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}
