use crate::license_walk::domain::{PackageIdentifier, VersionMetadata};
use crate::ports::outbound::PackageRegistry;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingPackageRegistry wraps a PackageRegistry and adds in-memory caching.
///
/// This adapter implements the decorator pattern so that a package reached
/// through several parents (a diamond in the dependency graph) is fetched
/// from the registry once per run. The tree it produces is identical to an
/// uncached walk. Only successful lookups are cached.
///
/// Concurrent walks that miss at the same moment may both reach the inner
/// registry; the last answer wins.
pub struct CachingPackageRegistry<R: PackageRegistry> {
    inner: R,
    cache: Arc<DashMap<String, Vec<VersionMetadata>>>,
}

impl<R: PackageRegistry> CachingPackageRegistry<R> {
    /// Creates a new caching registry wrapping the given inner registry
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: PackageRegistry> PackageRegistry for CachingPackageRegistry<R> {
    async fn get_package_info(
        &self,
        identifier: &PackageIdentifier,
    ) -> Result<Vec<VersionMetadata>> {
        // `name@spec` distinguishes `foo` from `foo@^1` and `foo@next`
        let key = identifier.to_string();

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let versions = self.inner.get_package_info(identifier).await?;
        self.cache.insert(key, versions.clone());

        Ok(versions)
    }
}
