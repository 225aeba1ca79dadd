use crate::shared::error::WalkerError;
use crate::shared::Result;
use std::fmt;

/// Maximum length of an npm package name
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Version selector attached to an identifier after the `@`
#[derive(Debug, Clone, PartialEq)]
pub enum VersionSpec {
    /// A single published version, e.g. `1.2.3`
    Exact(semver::Version),
    /// A semver range, e.g. `^1.2.0` or `1.x`
    Range(semver::VersionReq),
    /// A dist-tag such as `latest` or `next`
    Tag(String),
}

impl VersionSpec {
    fn parse(spec: &str) -> Self {
        if let Ok(version) = semver::Version::parse(spec) {
            return VersionSpec::Exact(version);
        }
        match semver::VersionReq::parse(spec) {
            Ok(req) => VersionSpec::Range(req),
            Err(_) => VersionSpec::Tag(spec.to_string()),
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSpec::Exact(version) => write!(f, "{}", version),
            VersionSpec::Range(req) => write!(f, "{}", req),
            VersionSpec::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// A package to look up: `name`, `name@spec`, `@scope/name` or `@scope/name@spec`
#[derive(Debug, Clone, PartialEq)]
pub struct PackageIdentifier {
    name: String,
    spec: Option<VersionSpec>,
}

impl PackageIdentifier {
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let invalid = |reason: &str| WalkerError::InvalidPackageIdentifier {
            identifier: input.to_string(),
            reason: reason.to_string(),
        };

        // The version separator is the first '@' after a possible scope prefix
        let search_from = usize::from(input.starts_with('@'));
        let (name, spec) = match input[search_from..].find('@') {
            Some(idx) => {
                let split = idx + search_from;
                (&input[..split], Some(&input[split + 1..]))
            }
            None => (input, None),
        };

        Self::validate_name(name).map_err(|reason| invalid(&reason))?;

        let spec = match spec {
            Some("") => return Err(invalid("Version after '@' is empty").into()),
            Some(spec) => Some(VersionSpec::parse(spec)),
            None => None,
        };

        Ok(Self {
            name: name.to_string(),
            spec,
        })
    }

    /// Identifier for a dependency declared by name only
    pub fn from_name(name: &str) -> Result<Self> {
        Self::validate_name(name).map_err(|reason| WalkerError::InvalidPackageIdentifier {
            identifier: name.to_string(),
            reason,
        })?;
        Ok(Self {
            name: name.to_string(),
            spec: None,
        })
    }

    fn validate_name(name: &str) -> std::result::Result<(), String> {
        if name.is_empty() {
            return Err("Package name cannot be empty".to_string());
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(format!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            ));
        }

        let bare = match name.strip_prefix('@') {
            Some(scoped) => {
                let (scope, rest) = scoped
                    .split_once('/')
                    .ok_or_else(|| "Scoped name is missing '/'".to_string())?;
                if scope.is_empty() || rest.is_empty() {
                    return Err("Scoped name must look like @scope/name".to_string());
                }
                if rest.contains('/') {
                    return Err("Scoped name contains more than one '/'".to_string());
                }
                format!("{}{}", scope, rest)
            }
            None => name.to_string(),
        };

        if bare.starts_with('.') || bare.contains("..") {
            return Err("Package name cannot start with '.' or contain '..'".to_string());
        }

        if !bare
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
        {
            return Err(
                "Package name contains invalid characters. Only alphanumeric, hyphens, underscores, dots, and tildes are allowed."
                    .to_string(),
            );
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> Option<&VersionSpec> {
        self.spec.as_ref()
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            Some(spec) => write!(f, "{}@{}", self.name, spec),
            None => write!(f, "{}", self.name),
        }
    }
}
