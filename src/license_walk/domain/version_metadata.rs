use serde::Deserialize;

/// License value as published in a package manifest.
///
/// npm has accepted several shapes over the years: a plain SPDX string,
/// an object `{ "type": ..., "url": ... }`, and the legacy `licenses` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeclaredLicense {
    Text(String),
    List(Vec<DeclaredLicense>),
    Object {
        #[serde(default, rename = "type")]
        kind: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
}

impl DeclaredLicense {
    /// Human-readable form, or `None` if the value carries no usable text
    pub fn format(&self) -> Option<String> {
        match self {
            DeclaredLicense::Text(text) => non_blank(text),
            DeclaredLicense::Object { kind, url } => kind
                .as_deref()
                .and_then(non_blank)
                .or_else(|| url.as_deref().and_then(non_blank)),
            DeclaredLicense::List(items) => {
                let parts: Vec<String> = items.iter().filter_map(|item| item.format()).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" OR "))
                }
            }
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Source repository reference from the `repository` manifest field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    url: String,
}

impl RepositoryReference {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A dependency entry: package name and the (unused) version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    pub name: String,
    pub range: String,
}

/// Metadata of one published version of a package
#[derive(Debug, Clone, PartialEq)]
pub struct VersionMetadata {
    name: String,
    version: String,
    dependencies: Vec<DependencyDeclaration>,
    license: Option<DeclaredLicense>,
    licenses: Option<DeclaredLicense>,
    repository: Option<RepositoryReference>,
}

impl VersionMetadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: Vec::new(),
            license: None,
            licenses: None,
            repository: None,
        }
    }

    pub fn with_dependency(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.dependencies.push(DependencyDeclaration {
            name: name.into(),
            range: range.into(),
        });
        self
    }

    pub fn with_license(mut self, license: DeclaredLicense) -> Self {
        self.license = Some(license);
        self
    }

    pub fn with_licenses(mut self, licenses: DeclaredLicense) -> Self {
        self.licenses = Some(licenses);
        self
    }

    pub fn with_repository(mut self, repository: RepositoryReference) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Dependencies in the order the manifest declares them
    pub fn dependencies(&self) -> &[DependencyDeclaration] {
        &self.dependencies
    }

    pub fn repository(&self) -> Option<&RepositoryReference> {
        self.repository.as_ref()
    }

    /// Formatted declared license. The legacy `licenses` field takes
    /// precedence over `license` when a manifest carries both.
    pub fn declared_license(&self) -> Option<String> {
        self.licenses
            .as_ref()
            .and_then(DeclaredLicense::format)
            .or_else(|| self.license.as_ref().and_then(DeclaredLicense::format))
    }
}
