/// ProgressReporter port for diagnostics emitted during a walk
///
/// This port is the only channel through which the walker and resolver
/// talk to the user outside the rendered tree. Implementations decide
/// whether anything reaches the terminal at all.
///
/// Reporters are shared by every concurrent branch of the walk, hence
/// `Send + Sync`.
pub trait ProgressReporter: Send + Sync {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports that one more package version has been resolved
    ///
    /// # Arguments
    /// * `name` - Name of the package whose node was just built
    fn report_package(&self, name: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a top-level walk
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for Box<T> {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_package(&self, name: &str) {
        (**self).report_package(name)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
