use crate::license_walk::domain::DependencyNode;

/// TreeFormatter port for rendering a resolved license tree
///
/// This port abstracts how a walk result is turned into text
/// (plain indented tree, colored tree, etc.).
pub trait TreeFormatter {
    /// Renders the nodes produced for one top-level package identifier
    ///
    /// # Arguments
    /// * `roots` - Root nodes of the walk, one per resolved version
    ///
    /// # Returns
    /// The rendered block, terminated by a blank line
    fn format(&self, roots: &[DependencyNode]) -> String;
}
