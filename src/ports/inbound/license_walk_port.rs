use crate::application::dto::{WalkRequest, WalkResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// LicenseWalkPort - Inbound port for the license walk use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to request license trees. It represents the application's public API.
#[async_trait]
pub trait LicenseWalkPort: Send + Sync {
    /// Walks every requested package and returns one tree per package
    ///
    /// # Errors
    /// Returns an error if the request is empty. Registry and repository
    /// failures are absorbed into `unknown` nodes instead.
    async fn walk_licenses(&self, request: WalkRequest) -> Result<WalkResponse>;
}
