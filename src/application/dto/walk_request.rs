use crate::license_walk::domain::PackageIdentifier;

/// WalkRequest - Internal request DTO for the license walk use case
#[derive(Debug, Clone)]
pub struct WalkRequest {
    /// Top-level packages to walk, in command-line order
    pub packages: Vec<PackageIdentifier>,
}

impl WalkRequest {
    pub fn new(packages: Vec<PackageIdentifier>) -> Self {
        Self { packages }
    }
}
