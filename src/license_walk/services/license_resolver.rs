use crate::license_walk::domain::{
    GitHubRepository, LicenseAnnotation, RawContentUrl, VersionMetadata,
};
use crate::license_walk::policies::LicenseExcerpt;
use crate::ports::outbound::{DirectoryEntry, DirectoryListing, ProgressReporter, RepositoryHost};

/// File name prefix searched for by the license-file tier
const LICENSE_PREFIX: &str = "license";

/// File name prefix searched for by the readme tier
const README_PREFIX: &str = "readme";

/// Keyword the readme tier looks for inside the README
const LICENSE_KEYWORD: &str = "license";

/// LicenseResolver service producing one license annotation per package version
///
/// Tiers are tried in order and the first one that yields text wins:
/// 1. `license` / `licenses` declared in the manifest (no network access)
/// 2. First `LICENSE*` file at the repository root, truncated
/// 3. First `README*` file at the repository root, windowed around "license";
///    a failed directory listing surfaces its raw response body here
/// 4. `unknown`
///
/// Resolution never fails. Transport errors are reported through the
/// progress reporter and fall through to the next tier.
pub struct LicenseResolver<'a, H, PR> {
    host: &'a H,
    reporter: &'a PR,
}

impl<'a, H, PR> LicenseResolver<'a, H, PR>
where
    H: RepositoryHost,
    PR: ProgressReporter,
{
    pub fn new(host: &'a H, reporter: &'a PR) -> Self {
        Self { host, reporter }
    }

    /// Resolves the license annotation for one package version
    pub async fn resolve(&self, metadata: &VersionMetadata) -> LicenseAnnotation {
        if let Some(declared) = metadata.declared_license() {
            return LicenseAnnotation::declared(declared);
        }

        let Some(reference) = metadata.repository() else {
            return LicenseAnnotation::unknown();
        };

        let repository = match GitHubRepository::parse(reference.url()) {
            Ok(repository) => repository,
            Err(e) => {
                self.reporter
                    .report(&format!("ℹ️  {}: {}", metadata.name(), e));
                return LicenseAnnotation::unknown();
            }
        };

        let listing = match self.host.list_directory(&repository).await {
            Ok(listing) => listing,
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: Failed to list {} for {}: {}",
                    repository,
                    metadata.name(),
                    e
                ));
                return LicenseAnnotation::unknown();
            }
        };

        if let Some(annotation) = self.from_license_file(metadata.name(), &listing).await {
            return annotation;
        }

        if let Some(annotation) = self.from_readme(metadata.name(), &listing).await {
            return annotation;
        }

        LicenseAnnotation::unknown()
    }

    async fn from_license_file(
        &self,
        package_name: &str,
        listing: &DirectoryListing,
    ) -> Option<LicenseAnnotation> {
        if !listing.is_success() {
            return None;
        }

        let entry = listing.find_by_prefix(LICENSE_PREFIX)?;
        let content = self.fetch_entry(package_name, entry).await?;
        // A blank LICENSE file is not an answer; the readme tier gets a turn
        Some(LicenseExcerpt::truncate(&content))
            .filter(|excerpt| !excerpt.trim().is_empty())
            .map(LicenseAnnotation::license_file)
    }

    async fn from_readme(
        &self,
        package_name: &str,
        listing: &DirectoryListing,
    ) -> Option<LicenseAnnotation> {
        if !listing.is_success() {
            // API error payloads (rate limits, missing repositories) are
            // shown as-is
            return Some(LicenseAnnotation::readme(listing.body.trim()));
        }

        let entry = listing.find_by_prefix(README_PREFIX)?;
        let content = self.fetch_entry(package_name, entry).await?;
        LicenseExcerpt::keyword_window(&content, LICENSE_KEYWORD).map(LicenseAnnotation::readme)
    }

    async fn fetch_entry(&self, package_name: &str, entry: &DirectoryEntry) -> Option<String> {
        let raw_url = match RawContentUrl::from_content_api_url(&entry.url) {
            Ok(raw_url) => raw_url,
            Err(e) => {
                self.reporter.report_error(&format!(
                    "❌ Error: Repository host returned an unusable URL for {} ({}): {}",
                    entry.name, package_name, e
                ));
                return None;
            }
        };

        match self.host.fetch_raw_content(&raw_url).await {
            Ok(content) => Some(content),
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch {} for {}: {}",
                    entry.name, package_name, e
                ));
                None
            }
        }
    }
}
