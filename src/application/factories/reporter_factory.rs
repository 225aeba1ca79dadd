use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use crate::ports::outbound::ProgressReporter;

/// How much the tool says besides the rendered trees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReporterType {
    /// Nothing at all
    #[default]
    Quiet,
    /// Diagnostics and a progress spinner on stderr
    Verbose,
}

impl ReporterType {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            ReporterType::Verbose
        } else {
            ReporterType::Quiet
        }
    }
}

/// Factory for creating progress reporters
pub struct ReporterFactory;

impl ReporterFactory {
    /// Creates a reporter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use npm_license_walker::application::factories::{ReporterFactory, ReporterType};
    /// use npm_license_walker::ports::outbound::ProgressReporter;
    ///
    /// let reporter = ReporterFactory::create(ReporterType::Quiet);
    /// reporter.report("never shown");
    /// ```
    pub fn create(reporter_type: ReporterType) -> Box<dyn ProgressReporter> {
        match reporter_type {
            ReporterType::Quiet => Box::new(QuietProgressReporter::new()),
            ReporterType::Verbose => Box::new(StderrProgressReporter::new()),
        }
    }
}
