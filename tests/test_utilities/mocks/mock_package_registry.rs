use npm_license_walker::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock PackageRegistry for testing
///
/// Answers from an in-memory table keyed by package name; every published
/// version registered for a name is returned. Unknown names fail. Clones
/// share their call log.
#[derive(Clone)]
pub struct MockPackageRegistry {
    pub packages: HashMap<String, Vec<VersionMetadata>>,
    pub delays: HashMap<String, Duration>,
    pub should_fail: bool,
    call_count: Arc<AtomicUsize>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockPackageRegistry {
    pub fn new() -> Self {
        Self {
            packages: HashMap::new(),
            delays: HashMap::new(),
            should_fail: false,
            call_count: Arc::new(AtomicUsize::new(0)),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_package(mut self, metadata: VersionMetadata) -> Self {
        self.packages
            .entry(metadata.name().to_string())
            .or_default()
            .push(metadata);
        self
    }

    /// Delays every lookup of `name`
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Identifiers looked up so far, in call order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Default for MockPackageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PackageRegistry for MockPackageRegistry {
    async fn get_package_info(
        &self,
        identifier: &PackageIdentifier,
    ) -> Result<Vec<VersionMetadata>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(identifier.to_string());

        if let Some(delay) = self.delays.get(identifier.name()) {
            tokio::time::sleep(*delay).await;
        }

        if self.should_fail {
            anyhow::bail!("Mock package registry failure");
        }

        self.packages
            .get(identifier.name())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found: {}", identifier))
    }
}
