use npm_license_walker::prelude::*;
use std::sync::{Arc, Mutex};

/// One call received by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported {
    Message(String),
    Package(String),
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter recording every call in arrival order
///
/// Clones share the log, so a test can keep one handle while the use case
/// owns another.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    log: Arc<Mutex<Vec<Reported>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Reported> {
        self.log.lock().unwrap().clone()
    }

    /// Names passed to `report_package`, in completion order
    pub fn packages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Reported::Package(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Reported::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: Reported) {
        self.log.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(Reported::Message(message.to_string()));
    }

    fn report_package(&self, name: &str) {
        self.record(Reported::Package(name.to_string()));
    }

    fn report_error(&self, message: &str) {
        self.record(Reported::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(Reported::Completion(message.to_string()));
    }
}
