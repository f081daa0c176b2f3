use async_trait::async_trait;
use telesum_core::releases::{ReleaseAsset, ReleaseError, ReleaseSource, SourceRelease};

/// Release source that never touches the network.
pub enum StubReleases {
    Listing(Vec<SourceRelease>),
    Failing,
}

impl StubReleases {
    pub fn one(tag: &str, assets: &[(&str, u64)]) -> Self {
        Self::Listing(vec![SourceRelease {
            tag_name: tag.to_string(),
            published_at: Some("2016-09-01T00:00:00Z".to_string()),
            assets: assets
                .iter()
                .map(|(name, download_count)| ReleaseAsset {
                    name: name.to_string(),
                    download_count: *download_count,
                })
                .collect(),
        }])
    }
}

#[async_trait]
impl ReleaseSource for StubReleases {
    async fn fetch(&self) -> Result<Vec<SourceRelease>, ReleaseError> {
        match self {
            Self::Listing(releases) => Ok(releases.clone()),
            Self::Failing => Err(ReleaseError::Status { status: 503 }),
        }
    }
}
