use crate::license_walk::domain::{DependencyNode, PackageIdentifier};

/// License tree produced for one top-level package identifier
#[derive(Debug, Clone)]
pub struct PackageTree {
    pub identifier: PackageIdentifier,
    /// One root per published version matching the identifier
    pub roots: Vec<DependencyNode>,
}

impl PackageTree {
    pub fn new(identifier: PackageIdentifier, roots: Vec<DependencyNode>) -> Self {
        Self { identifier, roots }
    }

    /// Total number of nodes across all roots
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(DependencyNode::subtree_size).sum()
    }
}

/// WalkResponse - Internal response DTO from the license walk use case
#[derive(Debug, Clone)]
pub struct WalkResponse {
    /// Trees in the same order as the request's packages
    pub trees: Vec<PackageTree>,
}

impl WalkResponse {
    pub fn new(trees: Vec<PackageTree>) -> Self {
        Self { trees }
    }
}
