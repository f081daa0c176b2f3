//! Release download counts
//!
//! Best-effort enrichment: the release history is fetched from an external
//! source and folded into per-release install counts by platform. A failed
//! fetch never blocks the telemetry summary.

mod classify;
mod source;
mod types;

pub use classify::{Platform, classify_asset, total_installs};
pub use source::{GithubReleases, NoReleases, ReleaseError, ReleaseSource, fetch_releases};
pub use types::{Installs, ReleaseAsset, ReleaseInfo, SourceRelease};
