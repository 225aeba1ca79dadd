/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the license walk uses to reach
/// the package registry, the repository host, and the terminal.
pub mod formatter;
pub mod output_presenter;
pub mod package_registry;
pub mod progress_reporter;
pub mod repository_host;

pub use formatter::TreeFormatter;
pub use output_presenter::OutputPresenter;
pub use package_registry::PackageRegistry;
pub use progress_reporter::ProgressReporter;
pub use repository_host::{DirectoryEntry, DirectoryListing, RepositoryHost};
