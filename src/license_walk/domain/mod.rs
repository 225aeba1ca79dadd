pub mod dependency_node;
pub mod package_identifier;
pub mod repository_location;
pub mod version_metadata;

pub use dependency_node::{
    DependencyNode, LicenseAnnotation, LicenseSource, CYCLE_LICENSE, UNKNOWN_LICENSE,
};
pub use package_identifier::{PackageIdentifier, VersionSpec};
pub use repository_location::{GitHubRepository, RawContentUrl, DEFAULT_RAW_CONTENT_URL};
pub use version_metadata::{
    DeclaredLicense, DependencyDeclaration, RepositoryReference, VersionMetadata,
};
