//! release-monitoring.org (Anitya) client for upstream release lookups

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::monitor::source::{SourceError, UpstreamResult, VersionSource};

/// Client for the Anitya v2 packages API.
///
/// Queries are scoped to one distribution, so `name` is the name the
/// distribution maps the project under rather than the Anitya project
/// name.
pub struct ReleaseMonitoringClient {
    client: Client,
    base_url: String,
    api_key: String,
    distribution: String,
}

impl ReleaseMonitoringClient {
    pub fn new(base_url: String, api_key: String, distribution: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            distribution,
        }
    }
}

/// Anitya v2 packages response structure
#[derive(Debug, Deserialize)]
struct PackagesResponse {
    #[serde(default)]
    items: Vec<PackageItem>,
}

#[derive(Debug, Deserialize)]
struct PackageItem {
    /// Stable versions, newest first
    #[serde(default)]
    stable_versions: Vec<String>,
}

#[async_trait]
impl VersionSource for ReleaseMonitoringClient {
    async fn latest_version(&self, name: &str) -> Result<UpstreamResult, SourceError> {
        debug!("Querying release-monitoring for package: {}", name);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("name", name), ("distribution", self.distribution.as_str())])
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(SourceError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "release-monitoring API returned status {}",
                status
            )));
        }

        let packages: PackagesResponse = response
            .json()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let latest_version = packages
            .items
            .first()
            .and_then(|item| item.stable_versions.first())
            .cloned();

        debug!(
            "release-monitoring answer for {}: {:?}",
            name, latest_version
        );

        Ok(UpstreamResult { latest_version })
    }
}
