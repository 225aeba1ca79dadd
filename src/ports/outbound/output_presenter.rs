use crate::shared::Result;

/// OutputPresenter port for presenting the rendered license trees
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
