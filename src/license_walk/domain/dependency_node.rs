use std::fmt;

/// Annotation used when no tier produced any license evidence
pub const UNKNOWN_LICENSE: &str = "unknown";

/// Annotation used when a dependency edge leads back to an ancestor
pub const CYCLE_LICENSE: &str = "cycle";

/// Which resolution tier produced a license annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseSource {
    /// `license` / `licenses` field of the package manifest
    Declared,
    /// Excerpt of a LICENSE* file at the repository root
    LicenseFile,
    /// Excerpt of a README* file around the word "license", or the raw
    /// body of a failed directory listing
    Readme,
    /// Nothing found
    Unknown,
    /// Dependency edge back to an ancestor on the current path
    Cycle,
}

impl fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LicenseSource::Declared => "declared",
            LicenseSource::LicenseFile => "repository-license-file",
            LicenseSource::Readme => "repository-readme",
            LicenseSource::Unknown => "unknown",
            LicenseSource::Cycle => "cycle",
        };
        f.write_str(label)
    }
}

/// License text plus the tier that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseAnnotation {
    text: String,
    source: LicenseSource,
}

impl LicenseAnnotation {
    pub fn declared(text: impl Into<String>) -> Self {
        Self::new(text, LicenseSource::Declared)
    }

    pub fn license_file(text: impl Into<String>) -> Self {
        Self::new(text, LicenseSource::LicenseFile)
    }

    pub fn readme(text: impl Into<String>) -> Self {
        Self::new(text, LicenseSource::Readme)
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LICENSE, LicenseSource::Unknown)
    }

    pub fn cycle() -> Self {
        Self::new(CYCLE_LICENSE, LicenseSource::Cycle)
    }

    /// Blank text never makes it into a node; it degrades to `unknown`.
    fn new(text: impl Into<String>, source: LicenseSource) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            return Self {
                text: UNKNOWN_LICENSE.to_string(),
                source: LicenseSource::Unknown,
            };
        }
        Self { text, source }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> LicenseSource {
        self.source
    }
}

/// One node of the resolved license tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    name: String,
    version: Option<String>,
    license: LicenseAnnotation,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        license: LicenseAnnotation,
        children: Vec<DependencyNode>,
    ) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
            license,
            children,
        }
    }

    /// Leaf for a package whose metadata could not be fetched
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            license: LicenseAnnotation::unknown(),
            children: Vec::new(),
        }
    }

    /// Leaf closing a dependency cycle
    pub fn cycle(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, LicenseAnnotation::cycle(), Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn license(&self) -> &LicenseAnnotation {
        &self.license
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DependencyNode::subtree_size)
            .sum::<usize>()
    }
}
