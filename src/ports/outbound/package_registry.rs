use crate::license_walk::domain::{PackageIdentifier, VersionMetadata};
use crate::shared::Result;
use async_trait::async_trait;

/// PackageRegistry port for looking up published package metadata
///
/// This port abstracts the package registry (e.g., the npm registry)
/// the walker queries once per dependency edge.
///
/// # Async Support
/// The walker issues one lookup per child concurrently, so implementations
/// must be `Send + Sync`.
#[async_trait]
pub trait PackageRegistry: Send + Sync {
    /// Fetches metadata for every published version matching the identifier
    ///
    /// # Arguments
    /// * `identifier` - Package name with an optional version, range or dist-tag
    ///
    /// # Returns
    /// One `VersionMetadata` per matching version. A bare name resolves to
    /// the `latest` dist-tag; a range may resolve to several versions.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package does not exist
    /// - The network request fails or the registry returns an error status
    /// - The response cannot be parsed
    async fn get_package_info(&self, identifier: &PackageIdentifier)
        -> Result<Vec<VersionMetadata>>;
}
