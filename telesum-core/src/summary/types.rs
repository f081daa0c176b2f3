use crate::ingest::ParseReport;
use crate::summary::version::AppVersion;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Everything the cross-day pass needs to know about one day.
#[derive(Debug, Clone)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub unique_users: HashSet<String>,
    pub sessions: Sessions,
    pub errors: BTreeMap<String, ErrorAggregate>,
    pub usage: Usage,
    pub parse: ParseReport,
}

/// Sessions are approximated by the number of telemetry reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sessions {
    pub total: u64,
    pub errored: u64,
    pub by_version: HashMap<AppVersion, SessionCounts>,
}

impl Sessions {
    pub(crate) fn record(&mut self, version: &AppVersion, errored: bool) {
        self.total += 1;
        if errored {
            self.errored += 1;
        }
        self.by_version
            .entry(version.clone())
            .or_default()
            .record(errored);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounts {
    pub total: u64,
    pub errored: u64,
}

impl SessionCounts {
    pub(crate) fn record(&mut self, errored: bool) {
        self.total += 1;
        if errored {
            self.errored += 1;
        }
    }
}

/// Active users by app version and OS, one representative
/// (version, platform) pair per user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub version: BTreeMap<String, u64>,
    pub platform: BTreeMap<String, u64>,
    pub version_platform: BTreeMap<String, u64>,
}

/// All reports of one uncaught error, grouped by [`ErrorAggregate::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorAggregate {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub count: u64,
    pub versions: BTreeSet<AppVersion>,
    pub platforms: BTreeSet<String>,
    pub processes: BTreeSet<String>,
}

impl ErrorAggregate {
    pub fn new(key: String) -> Self {
        Self {
            key,
            message: None,
            stack: None,
            count: 0,
            versions: BTreeSet::new(),
            platforms: BTreeSet::new(),
            processes: BTreeSet::new(),
        }
    }

    /// Folds one more occurrence in.
    ///
    /// Message and stack follow the newest version seen, so the entry shows
    /// the most recent rendering of the error.
    pub fn record(
        &mut self,
        version: AppVersion,
        platform: &str,
        process: Option<&str>,
        message: Option<&str>,
        stack: Option<&str>,
    ) {
        self.count += 1;
        self.platforms.insert(platform.to_string());
        if let Some(process) = process {
            self.processes.insert(process.to_string());
        }

        let is_newest = self.versions.last().is_none_or(|newest| version >= *newest);
        self.versions.insert(version);

        if is_newest {
            self.message = message.map(str::to_string);
            self.stack = stack.map(str::to_string);
        }
    }
}
