/// Console adapters for walk diagnostics
mod progress_reporter;

pub use progress_reporter::{QuietProgressReporter, StderrProgressReporter};
