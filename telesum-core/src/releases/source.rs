use crate::conf::types::ReleasesConfig;
use crate::releases::types::{ReleaseInfo, SourceRelease};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("release request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("release source returned HTTP {status}")]
    Status { status: u16 },
}

/// Where release history comes from.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<SourceRelease>, ReleaseError>;
}

/// Lists releases from the GitHub releases API.
pub struct GithubReleases {
    client: reqwest::Client,
    url: String,
}

impl GithubReleases {
    pub fn new(config: &ReleasesConfig) -> Result<Self, ReleaseError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl ReleaseSource for GithubReleases {
    async fn fetch(&self) -> Result<Vec<SourceRelease>, ReleaseError> {
        tracing::info!(url = %self.url, "Fetching releases");

        let resp = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ReleaseError::Status {
                status: resp.status().as_u16(),
            });
        }

        Ok(resp.json().await?)
    }
}

/// Used when release enrichment is switched off.
pub struct NoReleases;

#[async_trait]
impl ReleaseSource for NoReleases {
    async fn fetch(&self) -> Result<Vec<SourceRelease>, ReleaseError> {
        Ok(Vec::new())
    }
}

/// Fetches and summarizes releases. Never fails: a broken source is logged
/// and yields no releases.
pub async fn fetch_releases(source: &dyn ReleaseSource) -> Vec<ReleaseInfo> {
    match source.fetch().await {
        Ok(releases) => {
            tracing::info!(count = releases.len(), "Got releases");
            releases.into_iter().map(ReleaseInfo::from).collect()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch releases, writing summary without them");
            Vec::new()
        }
    }
}
