use super::RequestLimiter;
use crate::license_walk::domain::{
    DeclaredLicense, PackageIdentifier, RepositoryReference, VersionMetadata, VersionSpec,
};
use crate::ports::outbound::PackageRegistry;
use crate::shared::error::WalkerError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Dist-tag used when an identifier carries no version
const LATEST_TAG: &str = "latest";

/// Registry document listing every published version of a package
#[derive(Debug, Deserialize)]
struct Packument {
    #[serde(default, rename = "dist-tags")]
    dist_tags: HashMap<String, String>,
    /// Keyed by version string, in publication order
    #[serde(default)]
    versions: Map<String, Value>,
}

/// The subset of a version manifest the walker needs
#[derive(Debug, Deserialize)]
struct VersionManifest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    license: Option<DeclaredLicense>,
    #[serde(default, deserialize_with = "lenient")]
    licenses: Option<DeclaredLicense>,
    #[serde(default, deserialize_with = "lenient")]
    repository: Option<RepositoryField>,
}

/// `repository` is either a shorthand string or `{ "type": ..., "url": ... }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepositoryField {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
}

impl RepositoryField {
    fn into_reference(self) -> Option<RepositoryReference> {
        let url = match self {
            RepositoryField::Url(url) => url,
            RepositoryField::Object { url } => url?,
        };
        if url.trim().is_empty() {
            None
        } else {
            Some(RepositoryReference::new(url.trim()))
        }
    }
}

/// Deserializes a field, treating a value of an unexpected shape as absent.
/// Published manifests contain every kind of junk in these fields.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// NpmRegistryClient adapter for fetching package metadata from an npm registry
///
/// This adapter implements the PackageRegistry port on top of the registry's
/// JSON document API (`GET {registry}/{name}`). Version selection happens
/// locally:
/// - no version: the `latest` dist-tag
/// - exact version: that version
/// - dist-tag: the version the tag points to
/// - semver range: every published version the range matches, ascending
pub struct NpmRegistryClient {
    client: reqwest::Client,
    registry_url: String,
    limiter: RequestLimiter,
    max_retries: u32,
}

impl NpmRegistryClient {
    /// Creates a client for the given registry base URL
    pub fn new(registry_url: &str, limiter: RequestLimiter) -> Result<Self> {
        let user_agent = format!("npm-license-walker/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            registry_url: registry_url.trim_end_matches('/').to_string(),
            limiter,
            max_retries: 3,
        })
    }

    /// Document URL for a package. Scoped names keep their scope in a
    /// single path segment: `@scope/name` becomes `%40scope%2Fname`.
    fn package_url(&self, name: &str) -> String {
        let encoded = if name.starts_with('@') {
            name.replace('@', "%40").replace('/', "%2F")
        } else {
            urlencoding::encode(name).into_owned()
        };
        format!("{}/{}", self.registry_url, encoded)
    }

    /// Fetches the packument, retrying transport failures and 5xx answers
    async fn fetch_with_retry(&self, identifier: &PackageIdentifier) -> Result<Packument> {
        let mut attempt = 1;
        loop {
            match self.fetch_packument(identifier).await {
                Ok(packument) => return Ok(packument),
                Err(e) if attempt < self.max_retries && Self::is_retryable(&e) => {
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn is_retryable(error: &anyhow::Error) -> bool {
        !matches!(
            error.downcast_ref::<WalkerError>(),
            Some(WalkerError::PackageNotFound { .. })
                | Some(WalkerError::RegistryError { .. })
        )
    }

    async fn fetch_packument(&self, identifier: &PackageIdentifier) -> Result<Packument> {
        let url = self.package_url(identifier.name());
        let _permit = self.limiter.acquire().await;

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WalkerError::PackageNotFound {
                identifier: identifier.name().to_string(),
            }
            .into());
        }
        if status.is_server_error() {
            anyhow::bail!("npm registry returned status code {}", status);
        }
        if !status.is_success() {
            return Err(WalkerError::RegistryError {
                identifier: identifier.name().to_string(),
                details: format!("npm registry returned status code {}", status),
            }
            .into());
        }

        let packument: Packument = response.json().await?;
        Ok(packument)
    }

    /// Picks the versions an identifier asks for out of a packument
    fn select_versions(
        packument: Packument,
        identifier: &PackageIdentifier,
    ) -> Result<Vec<VersionMetadata>> {
        let Packument {
            dist_tags,
            mut versions,
        } = packument;

        let selected: Vec<(String, Value)> = match identifier.spec() {
            None => Self::tagged(&dist_tags, &mut versions, LATEST_TAG),
            Some(VersionSpec::Tag(tag)) => Self::tagged(&dist_tags, &mut versions, tag),
            Some(VersionSpec::Exact(version)) => {
                let key = version.to_string();
                versions.remove(&key).map(|manifest| (key, manifest)).into_iter().collect()
            }
            Some(VersionSpec::Range(req)) => {
                let mut matching: Vec<(semver::Version, String, Value)> = versions
                    .into_iter()
                    .filter_map(|(key, manifest)| {
                        let version = semver::Version::parse(&key).ok()?;
                        req.matches(&version).then_some((version, key, manifest))
                    })
                    .collect();
                matching.sort_by(|a, b| a.0.cmp(&b.0));
                matching
                    .into_iter()
                    .map(|(_, key, manifest)| (key, manifest))
                    .collect()
            }
        };

        selected
            .into_iter()
            .map(|(key, manifest)| Self::to_metadata(identifier.name(), &key, manifest))
            .collect()
    }

    fn tagged(
        dist_tags: &HashMap<String, String>,
        versions: &mut Map<String, Value>,
        tag: &str,
    ) -> Vec<(String, Value)> {
        dist_tags
            .get(tag)
            .and_then(|key| versions.remove(key).map(|manifest| (key.clone(), manifest)))
            .into_iter()
            .collect()
    }

    fn to_metadata(package_name: &str, key: &str, manifest: Value) -> Result<VersionMetadata> {
        let manifest: VersionManifest =
            serde_json::from_value(manifest).map_err(|e| WalkerError::RegistryError {
                identifier: format!("{}@{}", package_name, key),
                details: format!("Unreadable version manifest: {}", e),
            })?;

        let name = manifest
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| package_name.to_string());
        let version = manifest.version.unwrap_or_else(|| key.to_string());

        let mut metadata = VersionMetadata::new(name, version);
        for (dependency, range) in manifest.dependencies {
            let range = match range {
                Value::String(range) => range,
                other => other.to_string(),
            };
            metadata = metadata.with_dependency(dependency, range);
        }
        if let Some(license) = manifest.license {
            metadata = metadata.with_license(license);
        }
        if let Some(licenses) = manifest.licenses {
            metadata = metadata.with_licenses(licenses);
        }
        if let Some(repository) = manifest.repository.and_then(RepositoryField::into_reference) {
            metadata = metadata.with_repository(repository);
        }
        Ok(metadata)
    }
}

// Note: no Default implementation. Building the HTTP client can fail and
// that failure has to reach the caller.

#[async_trait]
impl PackageRegistry for NpmRegistryClient {
    async fn get_package_info(
        &self,
        identifier: &PackageIdentifier,
    ) -> Result<Vec<VersionMetadata>> {
        let packument = self.fetch_with_retry(identifier).await?;
        Self::select_versions(packument, identifier)
    }
}
