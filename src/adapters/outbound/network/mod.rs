/// Network adapters for the npm registry and GitHub
mod caching_registry_client;
mod github_client;
mod npm_registry_client;
mod request_limiter;

pub use caching_registry_client::CachingPackageRegistry;
pub use github_client::{GitHubContentClient, DEFAULT_GITHUB_API_URL};
pub use npm_registry_client::{NpmRegistryClient, DEFAULT_REGISTRY_URL};
pub use request_limiter::RequestLimiter;
