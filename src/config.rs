//! Configuration file support for npm-license-walker.
//!
//! Provides YAML-based configuration through `npm-license-walker.config.yml`
//! files and merges it with command-line flags and the environment.

use anyhow::Context;
use npm_license_walker::adapters::outbound::network::{
    DEFAULT_GITHUB_API_URL, DEFAULT_REGISTRY_URL,
};
use npm_license_walker::license_walk::domain::DEFAULT_RAW_CONTENT_URL;
use npm_license_walker::shared::error::WalkerError;
use npm_license_walker::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "npm-license-walker.config.yml";

/// Environment variable consulted when no token is configured
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// In-flight HTTP request limit when neither config nor CLI set one
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 16;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub github_api_url: Option<String>,
    /// Raw file host paired with `github_api_url`
    pub github_raw_url: Option<String>,
    pub github_token: Option<String>,
    pub max_concurrent_requests: Option<usize>,
    pub cache_metadata: Option<bool>,
    pub color: Option<bool>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// One warning per field the schema does not know
    pub fn warnings(&self) -> Vec<String> {
        self.unknown_fields
            .keys()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    validate_url("registry_url", config.registry_url.as_deref())?;
    validate_url("github_api_url", config.github_api_url.as_deref())?;
    validate_url("github_raw_url", config.github_raw_url.as_deref())?;
    Ok(())
}

fn validate_url(field: &str, url: Option<&str>) -> Result<()> {
    let Some(url) = url else {
        return Ok(());
    };
    if url.starts_with("https://") || url.starts_with("http://") {
        return Ok(());
    }
    Err(WalkerError::ConfigError {
        message: format!("{} must be an http(s) URL, got '{}'", field, url),
        hint: format!("Use a value such as {}: https://example.com", field),
    }
    .into())
}

/// Effective settings after merging CLI flags, config file and environment
///
/// Precedence: CLI flag, then config file, then environment, then default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerSettings {
    pub registry_url: String,
    pub github_api_url: String,
    pub github_raw_url: String,
    pub github_token: Option<String>,
    /// `0` means unbounded
    pub max_concurrent_requests: usize,
    pub cache_metadata: bool,
    pub color: bool,
    pub verbose: bool,
}

impl WalkerSettings {
    /// Merges every settings source
    ///
    /// # Arguments
    /// * `args` - Parsed command line
    /// * `config` - Loaded config file, if any
    /// * `env_token` - Value of `GITHUB_TOKEN`, if set
    /// * `color_capable` - Whether the output destination is a terminal
    pub fn resolve(
        args: &Args,
        config: Option<&ConfigFile>,
        env_token: Option<String>,
        color_capable: bool,
    ) -> Self {
        let defaults = ConfigFile::default();
        let config = config.unwrap_or(&defaults);

        let github_token = config
            .github_token
            .clone()
            .or(env_token)
            .filter(|token| !token.trim().is_empty());

        Self {
            registry_url: config
                .registry_url
                .clone()
                .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
            github_api_url: config
                .github_api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            github_raw_url: config
                .github_raw_url
                .clone()
                .unwrap_or_else(|| DEFAULT_RAW_CONTENT_URL.to_string()),
            github_token,
            max_concurrent_requests: args
                .max_concurrent
                .or(config.max_concurrent_requests)
                .unwrap_or(DEFAULT_MAX_CONCURRENT_REQUESTS),
            cache_metadata: args.cache || config.cache_metadata.unwrap_or(false),
            color: color_capable && !args.no_color && config.color.unwrap_or(true),
            verbose: args.verbose || config.verbose.unwrap_or(false),
        }
    }
}
