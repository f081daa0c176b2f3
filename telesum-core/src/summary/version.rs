use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Version label for reports from apps that predate version reporting.
pub const PRE_VERSIONED: &str = "pre-0.12";

/// First app release that reported its version.
const FIRST_VERSIONED: &str = "0.12.0";

/// An app version label as it appears in telemetry.
///
/// Ordering: [`PRE_VERSIONED`] sorts below everything, then labels that are
/// not semver (lexically), then real versions by semver precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppVersion(String);

impl AppVersion {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn pre_versioned() -> Self {
        Self(PRE_VERSIONED.to_string())
    }

    pub fn first_versioned() -> Self {
        Self(FIRST_VERSIONED.to_string())
    }

    /// Normalizes the version field of a report. Missing or empty means the
    /// app was too old to send one.
    pub fn from_report(version: Option<&str>) -> Self {
        match version {
            Some(v) if !v.is_empty() => Self::new(v),
            _ => Self::pre_versioned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_pre_versioned(&self) -> bool {
        self.0 == PRE_VERSIONED
    }

    fn rank(&self) -> (u8, Option<semver::Version>) {
        if self.is_pre_versioned() {
            return (0, None);
        }
        match semver::Version::parse(&self.0) {
            Ok(v) => (2, Some(v)),
            Err(_) => (1, None),
        }
    }
}

impl Ord for AppVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let (rank_a, semver_a) = self.rank();
        let (rank_b, semver_b) = other.rank();

        rank_a
            .cmp(&rank_b)
            .then_with(|| semver_a.cmp(&semver_b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for AppVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
