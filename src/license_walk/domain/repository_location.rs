use crate::shared::error::WalkerError;
use crate::shared::Result;
use std::fmt;

const GITHUB_HOSTS: [&str; 2] = ["github.com/", "www.github.com/"];

const URL_SCHEMES: [&str; 7] = [
    "git+https://",
    "git+http://",
    "git+ssh://",
    "https://",
    "http://",
    "git://",
    "ssh://",
];

/// Raw-content host of public GitHub
pub const DEFAULT_RAW_CONTENT_URL: &str = "https://raw.githubusercontent.com";

/// `{owner, project}` of a GitHub-hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubRepository {
    owner: String,
    project: String,
}

impl GitHubRepository {
    /// Parses the `repository.url` forms npm manifests use for GitHub.
    ///
    /// Accepted: `https://github.com/o/p`, `git+https://…`, `git://…`,
    /// `git+ssh://git@github.com/o/p` (also with `github.com:o/p`),
    /// `git@github.com:o/p`, `github:o/p`
    /// and the bare `o/p` shorthand, each with an optional `.git` suffix
    /// and `#ref` fragment.
    pub fn parse(url: &str) -> Result<Self> {
        let unrecognized = || WalkerError::UnrecognizedRepositoryUrl {
            url: url.to_string(),
        };

        let trimmed = url.trim();
        let without_fragment = trimmed.split('#').next().unwrap_or_default();

        let path = if let Some(rest) = without_fragment.strip_prefix("github:") {
            rest
        } else if let Some(rest) = without_fragment.strip_prefix("git@github.com:") {
            rest
        } else if let Some(scheme) = URL_SCHEMES
            .iter()
            .find(|scheme| without_fragment.starts_with(**scheme))
        {
            let authority = &without_fragment[scheme.len()..];
            // `git+ssh://git@github.com:o/p` mixes a URL scheme with scp syntax
            if let Some(rest) = authority.strip_prefix("git@github.com:") {
                rest
            } else {
                let authority = authority.strip_prefix("git@").unwrap_or(authority);
                GITHUB_HOSTS
                    .iter()
                    .find_map(|host| authority.strip_prefix(*host))
                    .ok_or_else(unrecognized)?
            }
        } else if !without_fragment.contains(':') && without_fragment.matches('/').count() == 1 {
            without_fragment
        } else {
            return Err(unrecognized().into());
        };

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let owner = segments.next().ok_or_else(unrecognized)?;
        let project = segments.next().ok_or_else(unrecognized)?;
        let project = project.strip_suffix(".git").unwrap_or(project);

        if !is_valid_segment(owner) || !is_valid_segment(project) {
            return Err(unrecognized().into());
        }

        Ok(Self {
            owner: owner.to_string(),
            project: project.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn project(&self) -> &str {
        &self.project
    }
}

impl fmt::Display for GitHubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.project)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Location of a file's raw content, derived from a content-API entry URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContentUrl {
    owner: String,
    project: String,
    path: String,
    git_ref: String,
}

impl RawContentUrl {
    /// Translates `…/repos/{owner}/{project}/contents/{path}?ref={ref}`.
    ///
    /// Any other shape is a `WalkerError::MalformedContentUrl`: the repository
    /// host broke its contract, which is not the same as a missing file.
    pub fn from_content_api_url(url: &str) -> Result<Self> {
        let malformed = |reason: &str| WalkerError::MalformedContentUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        let (location, query) = url
            .split_once('?')
            .ok_or_else(|| malformed("missing ?ref= query"))?;

        let git_ref = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("ref="))
            .filter(|r| !r.is_empty())
            .ok_or_else(|| malformed("missing ref parameter"))?;

        let (_, repo_path) = location
            .split_once("/repos/")
            .ok_or_else(|| malformed("missing /repos/ segment"))?;

        let mut parts = repo_path.splitn(4, '/');
        let owner = parts.next().filter(|s| !s.is_empty());
        let project = parts.next().filter(|s| !s.is_empty());
        let contents = parts.next();
        let path = parts.next().filter(|s| !s.is_empty());

        match (owner, project, contents, path) {
            (Some(owner), Some(project), Some("contents"), Some(path)) => Ok(Self {
                owner: owner.to_string(),
                project: project.to_string(),
                path: path.to_string(),
                git_ref: git_ref.to_string(),
            }),
            (_, _, Some(other), _) if other != "contents" => {
                Err(malformed("expected /contents/ after owner and project").into())
            }
            _ => Err(malformed("expected /repos/{owner}/{project}/contents/{path}").into()),
        }
    }

    /// Full URL of the file below a raw-content host such as
    /// [`DEFAULT_RAW_CONTENT_URL`]
    pub fn url_at(&self, base: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            base.trim_end_matches('/'),
            self.owner,
            self.project,
            self.git_ref,
            self.path
        )
    }
}
