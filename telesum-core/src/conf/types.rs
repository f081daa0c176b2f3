use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_RELEASES_URL: &str =
    "https://api.github.com/repos/webtorrent/webtorrent-desktop/releases";

/// Resolved configuration for a summarization run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TelesumConfig {
    /// Directory holding the `YYYY-MM-DD.log` files.
    pub telemetry_root: PathBuf,

    /// Day files parsed at the same time. Each one is held in memory whole.
    pub max_concurrent_reads: usize,

    /// Summary artifact; relative paths are resolved against `telemetry_root`.
    pub output: PathBuf,

    pub releases: ReleasesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReleasesConfig {
    pub enabled: bool,
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for TelesumConfig {
    fn default() -> Self {
        Self {
            telemetry_root: PathBuf::from("telemetry"),
            max_concurrent_reads: 1,
            output: PathBuf::from("summary.json"),
            releases: ReleasesConfig::default(),
        }
    }
}

impl Default for ReleasesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_RELEASES_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("telesum/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TelesumConfig {
    pub fn output_path(&self) -> PathBuf {
        self.telemetry_root.join(&self.output)
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(root) = &overrides.telemetry_root {
            self.telemetry_root = root.clone();
        }
        if let Some(n) = overrides.max_concurrent_reads {
            self.max_concurrent_reads = n;
        }
        if let Some(output) = &overrides.output {
            self.output = output.clone();
        }
        if overrides.no_releases {
            self.releases.enabled = false;
        }
        self
    }
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub telemetry_root: Option<PathBuf>,
    pub max_concurrent_reads: Option<usize>,
    pub output: Option<PathBuf>,
    pub no_releases: bool,
}
