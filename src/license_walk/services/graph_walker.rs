use crate::license_walk::domain::{DependencyNode, PackageIdentifier, VersionMetadata};
use crate::license_walk::services::LicenseResolver;
use crate::ports::outbound::{PackageRegistry, ProgressReporter, RepositoryHost};
use futures::future::{self, BoxFuture, FutureExt};

/// `(name, version)` of a package version on the active recursion path
#[derive(Debug, Clone, PartialEq, Eq)]
struct PackageKey {
    name: String,
    version: String,
}

impl PackageKey {
    fn of(metadata: &VersionMetadata) -> Self {
        Self {
            name: metadata.name().to_string(),
            version: metadata.version().to_string(),
        }
    }
}

/// GraphWalker service building the license tree of a package
///
/// Every dependency of a node is walked concurrently, and so is the node's
/// own license resolution; a node is built only once all of them finished.
/// Children keep the declaration order of the manifest regardless of which
/// lookup completes first.
///
/// Failures never leave a subtree: a package whose metadata cannot be
/// fetched becomes an `unknown` leaf, and an edge back to a version already
/// on the current path becomes a `cycle` leaf. The same package reached
/// through two different parents is walked twice.
pub struct GraphWalker<'a, R, H, PR> {
    registry: &'a R,
    resolver: LicenseResolver<'a, H, PR>,
    reporter: &'a PR,
}

impl<'a, R, H, PR> GraphWalker<'a, R, H, PR>
where
    R: PackageRegistry,
    H: RepositoryHost,
    PR: ProgressReporter,
{
    pub fn new(registry: &'a R, host: &'a H, reporter: &'a PR) -> Self {
        Self {
            registry,
            resolver: LicenseResolver::new(host, reporter),
            reporter,
        }
    }

    /// Walks a package and its transitive dependencies
    ///
    /// # Returns
    /// One root node per published version matching the identifier; a
    /// single `unknown` leaf if nothing could be fetched
    pub async fn walk(&self, identifier: &PackageIdentifier) -> Vec<DependencyNode> {
        self.walk_from(identifier.clone(), Vec::new()).await
    }

    fn walk_from<'s>(
        &'s self,
        identifier: PackageIdentifier,
        ancestors: Vec<PackageKey>,
    ) -> BoxFuture<'s, Vec<DependencyNode>> {
        async move {
            let versions = match self.registry.get_package_info(&identifier).await {
                Ok(versions) if !versions.is_empty() => versions,
                Ok(_) => {
                    self.reporter.report_error(&format!(
                        "⚠️  Warning: No published version of {} matches",
                        identifier
                    ));
                    return vec![DependencyNode::unresolved(identifier.name())];
                }
                Err(e) => {
                    self.reporter.report_error(&format!(
                        "⚠️  Warning: Failed to fetch metadata for {}: {}",
                        identifier, e
                    ));
                    return vec![DependencyNode::unresolved(identifier.name())];
                }
            };

            future::join_all(
                versions
                    .into_iter()
                    .map(|metadata| self.walk_version(metadata, &ancestors)),
            )
            .await
        }
        .boxed()
    }

    async fn walk_version(
        &self,
        metadata: VersionMetadata,
        ancestors: &[PackageKey],
    ) -> DependencyNode {
        let key = PackageKey::of(&metadata);
        if ancestors.contains(&key) {
            self.reporter.report(&format!(
                "🔁 Dependency cycle: {}@{} is its own ancestor",
                key.name, key.version
            ));
            return DependencyNode::cycle(key.name, key.version);
        }

        let mut path = ancestors.to_vec();
        path.push(key);

        let children = future::join_all(
            metadata
                .dependencies()
                .iter()
                .map(|dependency| self.walk_dependency(&dependency.name, path.clone())),
        );
        let license = self.resolver.resolve(&metadata);

        let (children, license) = futures::join!(children, license);
        let children: Vec<DependencyNode> = children.into_iter().flatten().collect();

        self.reporter.report_package(metadata.name());
        DependencyNode::new(metadata.name(), metadata.version(), license, children)
    }

    fn walk_dependency<'s>(
        &'s self,
        name: &str,
        ancestors: Vec<PackageKey>,
    ) -> BoxFuture<'s, Vec<DependencyNode>> {
        match PackageIdentifier::from_name(name) {
            Ok(identifier) => self.walk_from(identifier, ancestors),
            Err(e) => {
                self.reporter
                    .report_error(&format!("⚠️  Warning: Skipping dependency: {}", e));
                future::ready(vec![DependencyNode::unresolved(name)]).boxed()
            }
        }
    }
}
