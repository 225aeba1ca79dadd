use crate::license_walk::domain::{GitHubRepository, RawContentUrl};
use crate::shared::Result;
use async_trait::async_trait;

/// One entry of a repository directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// File or directory name, e.g. `LICENSE` or `README.md`
    pub name: String,
    /// Content-API URL of the entry (`…/repos/{owner}/{project}/contents/{path}?ref={ref}`)
    pub url: String,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Result of listing a repository root
///
/// A non-200 answer is still a listing: `body` then carries the host's
/// error payload verbatim and `entries` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub status_code: u16,
    pub entries: Vec<DirectoryEntry>,
    pub body: String,
}

impl DirectoryListing {
    pub fn ok(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            status_code: 200,
            entries,
            body: String::new(),
        }
    }

    pub fn failed(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            entries: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }

    /// First entry whose name starts with `prefix`, ignoring ASCII case
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|entry| {
            entry
                .name
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }
}

/// RepositoryHost port for reading files from a source repository
///
/// This port abstracts the repository hosting provider (e.g., the GitHub
/// contents API) used by the license fallback tiers.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists the root directory of a repository
    ///
    /// # Errors
    /// Returns an error only for transport failures. HTTP error statuses are
    /// reported through `DirectoryListing::status_code`.
    async fn list_directory(&self, repository: &GitHubRepository) -> Result<DirectoryListing>;

    /// Fetches the raw content of a file
    ///
    /// # Arguments
    /// * `file` - File location derived from a listing entry; the host
    ///   decides which raw-content server serves it
    async fn fetch_raw_content(&self, file: &RawContentUrl) -> Result<String>;
}
