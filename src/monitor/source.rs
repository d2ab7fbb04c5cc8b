//! Upstream version source trait

#[cfg(test)]
use mockall::automock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Answer from an upstream release index for a single project name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResult {
    /// Latest stable version, or `None` when the service answered but
    /// has no release under the queried name.
    pub latest_version: Option<String>,
}

/// Trait for querying the latest upstream release of a project
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the latest stable version published under `name`
    ///
    /// # Returns
    /// * `Ok(UpstreamResult)` - The service answered; the result may still be a miss
    /// * `Err(SourceError)` - If the query itself fails
    async fn latest_version(&self, name: &str) -> Result<UpstreamResult, SourceError>;
}
