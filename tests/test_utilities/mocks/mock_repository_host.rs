use npm_license_walker::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock RepositoryHost for testing
///
/// Listings are keyed by `owner/project`; files by raw-content URL.
/// Unregistered repositories answer with a 404 listing. Clones share their
/// call counters.
#[derive(Clone)]
pub struct MockRepositoryHost {
    pub listings: HashMap<String, DirectoryListing>,
    pub files: HashMap<String, String>,
    list_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
}

impl MockRepositoryHost {
    pub fn new() -> Self {
        Self {
            listings: HashMap::new(),
            files: HashMap::new(),
            list_calls: Arc::new(AtomicUsize::new(0)),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Registers a repository whose root holds `files` (name, content)
    pub fn with_repository(mut self, owner: &str, project: &str, files: &[(&str, &str)]) -> Self {
        let entries = files
            .iter()
            .map(|(name, content)| {
                self.files.insert(
                    format!(
                        "https://raw.githubusercontent.com/{}/{}/main/{}",
                        owner, project, name
                    ),
                    content.to_string(),
                );
                DirectoryEntry::new(
                    *name,
                    format!(
                        "https://api.github.com/repos/{}/{}/contents/{}?ref=main",
                        owner, project, name
                    ),
                )
            })
            .collect();
        self.listings.insert(
            format!("{}/{}", owner, project),
            DirectoryListing::ok(entries),
        );
        self
    }

    /// Registers a repository whose listing fails with `status_code`
    pub fn with_failed_listing(
        mut self,
        owner: &str,
        project: &str,
        status_code: u16,
        body: &str,
    ) -> Self {
        self.listings.insert(
            format!("{}/{}", owner, project),
            DirectoryListing::failed(status_code, body),
        );
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRepositoryHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RepositoryHost for MockRepositoryHost {
    async fn list_directory(&self, repository: &GitHubRepository) -> Result<DirectoryListing> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .listings
            .get(&repository.to_string())
            .cloned()
            .unwrap_or_else(|| DirectoryListing::failed(404, r#"{"message":"Not Found"}"#)))
    }

    async fn fetch_raw_content(&self, file: &RawContentUrl) -> Result<String> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let raw_url = file.url_at(DEFAULT_RAW_CONTENT_URL);
        self.files
            .get(&raw_url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found: {}", raw_url))
    }
}
