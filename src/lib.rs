//! npm-license-walker - license tree tool for npm packages
//!
//! This library walks the dependency graph of npm packages and annotates
//! every package with license evidence, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_walk`): Pure walk and resolution logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_license_walker::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let limiter = RequestLimiter::new(16);
//! let package_registry = NpmRegistryClient::new(DEFAULT_REGISTRY_URL, limiter.clone())?;
//! let repository_host = GitHubContentClient::new(DEFAULT_GITHUB_API_URL, None, limiter)?;
//! let progress_reporter = QuietProgressReporter::new();
//!
//! // Create use case
//! let use_case = WalkLicensesUseCase::new(package_registry, repository_host, progress_reporter);
//!
//! // Execute
//! let request = WalkRequest::new(vec![PackageIdentifier::parse("express")?]);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = TextTreeFormatter::new();
//! for tree in &response.trees {
//!     print!("{}", formatter.format(&tree.roots));
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod license_walk;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::TextTreeFormatter;
    pub use crate::adapters::outbound::network::{
        CachingPackageRegistry, GitHubContentClient, NpmRegistryClient, RequestLimiter,
        DEFAULT_GITHUB_API_URL, DEFAULT_REGISTRY_URL,
    };
    pub use crate::application::dto::{PackageTree, WalkRequest, WalkResponse};
    pub use crate::application::use_cases::WalkLicensesUseCase;
    pub use crate::license_walk::domain::{
        DeclaredLicense, DependencyNode, GitHubRepository, LicenseAnnotation, LicenseSource,
        PackageIdentifier, RawContentUrl, RepositoryReference, VersionMetadata, VersionSpec,
        DEFAULT_RAW_CONTENT_URL,
    };
    pub use crate::license_walk::policies::LicenseExcerpt;
    pub use crate::license_walk::services::{GraphWalker, LicenseResolver};
    pub use crate::ports::inbound::LicenseWalkPort;
    pub use crate::ports::outbound::{
        DirectoryEntry, DirectoryListing, OutputPresenter, PackageRegistry, ProgressReporter,
        RepositoryHost, TreeFormatter,
    };
    pub use crate::shared::Result;
}
