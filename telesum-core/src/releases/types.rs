use serde::{Deserialize, Serialize};

/// A release as listed by the source (GitHub releases API shape).
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRelease {
    pub tag_name: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    #[serde(default)]
    pub download_count: u64,
}

/// Download counts by installer platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Installs {
    pub win32: u64,
    pub darwin: u64,
    pub linux: u64,
    pub total: u64,
}

impl std::ops::AddAssign for Installs {
    fn add_assign(&mut self, other: Self) {
        self.win32 += other.win32;
        self.darwin += other.darwin;
        self.linux += other.linux;
        self.total += other.total;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub published_at: Option<String>,
    pub installs: Installs,
}
