/// Mock implementations for testing
mod mock_package_registry;
mod mock_progress_reporter;
mod mock_repository_host;

pub use mock_package_registry::MockPackageRegistry;
pub use mock_progress_reporter::{MockProgressReporter, Reported};
pub use mock_repository_host::MockRepositoryHost;
