use crate::application::dto::{PackageTree, WalkRequest, WalkResponse};
use crate::license_walk::services::GraphWalker;
use crate::ports::inbound::LicenseWalkPort;
use crate::ports::outbound::{PackageRegistry, ProgressReporter, RepositoryHost};
use crate::shared::Result;
use async_trait::async_trait;
use futures::future;

/// WalkLicensesUseCase - Core use case for license tree generation
///
/// This use case orchestrates one graph walk per requested package using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
/// * `H` - RepositoryHost implementation
/// * `PR` - ProgressReporter implementation
pub struct WalkLicensesUseCase<R, H, PR> {
    package_registry: R,
    repository_host: H,
    progress_reporter: PR,
}

impl<R, H, PR> WalkLicensesUseCase<R, H, PR>
where
    R: PackageRegistry,
    H: RepositoryHost,
    PR: ProgressReporter,
{
    /// Creates a new WalkLicensesUseCase with injected dependencies
    pub fn new(package_registry: R, repository_host: H, progress_reporter: PR) -> Self {
        Self {
            package_registry,
            repository_host,
            progress_reporter,
        }
    }

    /// Executes the license walk use case
    ///
    /// Top-level packages are walked concurrently and independently; the
    /// response lists their trees in request order.
    ///
    /// # Errors
    /// Returns an error if the request names no packages. Lookup failures
    /// inside a walk never surface here.
    pub async fn execute(&self, request: WalkRequest) -> Result<WalkResponse> {
        if request.packages.is_empty() {
            anyhow::bail!("No packages to walk. Pass at least one package name.");
        }

        self.progress_reporter.report(&format!(
            "🔍 Walking dependency licenses for {} package(s)...",
            request.packages.len()
        ));

        let walker = GraphWalker::new(
            &self.package_registry,
            &self.repository_host,
            &self.progress_reporter,
        );

        let trees = future::join_all(request.packages.into_iter().map(|identifier| {
            let walker = &walker;
            async move {
                let roots = walker.walk(&identifier).await;
                PackageTree::new(identifier, roots)
            }
        }))
        .await;

        for tree in &trees {
            self.progress_reporter.report_completion(&format!(
                "✅ {}: {} package(s) in tree",
                tree.identifier,
                tree.node_count()
            ));
        }

        Ok(WalkResponse::new(trees))
    }
}

#[async_trait]
impl<R, H, PR> LicenseWalkPort for WalkLicensesUseCase<R, H, PR>
where
    R: PackageRegistry,
    H: RepositoryHost,
    PR: ProgressReporter,
{
    async fn walk_licenses(&self, request: WalkRequest) -> Result<WalkResponse> {
        self.execute(request).await
    }
}
