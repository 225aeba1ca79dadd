use super::RequestLimiter;
use crate::license_walk::domain::{GitHubRepository, RawContentUrl, DEFAULT_RAW_CONTENT_URL};
use crate::ports::outbound::{DirectoryEntry, DirectoryListing, RepositoryHost};
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// One item of a `GET /repos/{owner}/{repo}/contents` answer
#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    url: String,
}

/// GitHubContentClient adapter for reading repository files through the
/// GitHub contents API
///
/// This adapter implements the RepositoryHost port. Directory listings keep
/// non-200 answers (rate limits, missing repositories) as data so the
/// resolver can decide what to show; only transport failures are errors.
///
/// Unauthenticated requests are limited to 60 per hour by GitHub, so a
/// token (`github_token` or `GITHUB_TOKEN`) is strongly recommended for
/// anything but small trees.
pub struct GitHubContentClient {
    client: reqwest::Client,
    api_url: String,
    raw_content_url: String,
    token: Option<String>,
    limiter: RequestLimiter,
}

impl GitHubContentClient {
    pub fn new(api_url: &str, token: Option<String>, limiter: RequestLimiter) -> Result<Self> {
        let user_agent = format!("npm-license-walker/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            raw_content_url: DEFAULT_RAW_CONTENT_URL.to_string(),
            token: token.filter(|token| !token.trim().is_empty()),
            limiter,
        })
    }

    /// Serves file contents from another raw-content host, e.g. a GitHub
    /// Enterprise instance next to a custom API URL
    pub fn with_raw_content_url(mut self, raw_content_url: &str) -> Self {
        self.raw_content_url = raw_content_url.trim_end_matches('/').to_string();
        self
    }

    fn contents_url(&self, repository: &GitHubRepository) -> String {
        format!(
            "{}/repos/{}/{}/contents",
            self.api_url,
            urlencoding::encode(repository.owner()),
            urlencoding::encode(repository.project())
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turns a contents-API answer into a listing
    fn parse_listing(status_code: u16, body: String) -> Result<DirectoryListing> {
        if status_code != 200 {
            return Ok(DirectoryListing::failed(status_code, body));
        }

        let items: Vec<ContentItem> = serde_json::from_str(&body)
            .context("GitHub contents API returned an unexpected payload")?;

        Ok(DirectoryListing::ok(
            items
                .into_iter()
                .map(|item| DirectoryEntry::new(item.name, item.url))
                .collect(),
        ))
    }
}

#[async_trait]
impl RepositoryHost for GitHubContentClient {
    async fn list_directory(&self, repository: &GitHubRepository) -> Result<DirectoryListing> {
        let url = self.contents_url(repository);
        let _permit = self.limiter.acquire().await;

        let request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        let response = self.authorize(request).send().await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;
        Self::parse_listing(status_code, body)
    }

    async fn fetch_raw_content(&self, file: &RawContentUrl) -> Result<String> {
        let raw_url = file.url_at(&self.raw_content_url);
        let _permit = self.limiter.acquire().await;

        // Only the configured raw-content host ever sees the token
        let response = self.authorize(self.client.get(&raw_url)).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Raw content request returned status code {}",
                response.status()
            );
        }

        Ok(response.text().await?)
    }
}
