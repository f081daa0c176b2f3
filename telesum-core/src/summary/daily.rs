use crate::ingest::{ErrorEvent, ParseReport, TelemetryRecord};
use crate::summary::types::{DailyAggregate, ErrorAggregate, Sessions, Usage};
use crate::summary::version::AppVersion;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Apps older than 0.12 didn't redact stack traces, so their frames still
/// point into the packaged app archive.
pub const UNREDACTED_STACK_MARKER: &str = "app.asar";

/// Grouping key for errors reported without a message.
pub const MISSING_ERROR_MESSAGE: &str = "<missing error message>";

/// Platform label for reports whose `system` block lacks `osPlatform`.
pub const UNKNOWN_PLATFORM: &str = "unknown";

const ERROR_KEY_CHARS: usize = 30;

/// Groups error reports by the start of their message.
pub fn error_key(message: Option<&str>) -> String {
    match message {
        Some(m) if !m.is_empty() => m.chars().take(ERROR_KEY_CHARS).collect(),
        _ => MISSING_ERROR_MESSAGE.to_string(),
    }
}

/// Works out which app version raised an error.
///
/// Per-error versions only exist since 0.13. For older reports the version is
/// reconstructed: an unredacted stack means pre-0.12, a pre-0.12 report keeps
/// its own label, and anything else must be 0.12.
pub fn effective_error_version(event: &ErrorEvent, report_version: &AppVersion) -> AppVersion {
    if let Some(v) = event.version.as_deref().filter(|v| !v.is_empty()) {
        return AppVersion::new(v);
    }

    let unredacted = event
        .stack
        .as_deref()
        .is_some_and(|s| s.contains(UNREDACTED_STACK_MARKER));
    if unredacted {
        return AppVersion::pre_versioned();
    }

    if *report_version < AppVersion::first_versioned() {
        return report_version.clone();
    }

    AppVersion::first_versioned()
}

/// Folds one day's reports into a [`DailyAggregate`].
pub struct DailySummarizer {
    date: NaiveDate,
    sessions: Sessions,
    errors: BTreeMap<String, ErrorAggregate>,

    // Last (version, platform) seen per user
    version_by_user: HashMap<String, (AppVersion, String)>,

    degenerate: u64,
}

impl DailySummarizer {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sessions: Sessions::default(),
            errors: BTreeMap::new(),
            version_by_user: HashMap::new(),
            degenerate: 0,
        }
    }

    pub fn push(&mut self, record: TelemetryRecord) {
        // Very rare empty reports only carry the client ip.
        let Some(system) = &record.system else {
            self.degenerate += 1;
            return;
        };

        let version = AppVersion::from_report(record.version.as_deref());
        let platform = system
            .os_platform
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(UNKNOWN_PLATFORM);

        let errors = record.errors();
        self.sessions.record(&version, !errors.is_empty());

        for event in errors {
            let error_version = effective_error_version(event, &version);

            self.errors
                .entry(error_key(event.message.as_deref()))
                .or_insert_with_key(|key| ErrorAggregate::new(key.clone()))
                .record(
                    error_version,
                    platform,
                    event.process.as_deref(),
                    event.message.as_deref(),
                    event.stack.as_deref(),
                );
        }

        // Anonymous sessions still count, but can't join the user set.
        if let Some(user_id) = &record.user_id {
            self.version_by_user
                .insert(user_id.clone(), (version, platform.to_string()));
        }
    }

    pub fn finish(self, parse: ParseReport) -> DailyAggregate {
        if self.degenerate > 0 {
            tracing::debug!(
                date = %self.date,
                count = self.degenerate,
                "Ignored reports without system info"
            );
        }

        let mut usage = Usage::default();
        let mut unique_users = HashSet::with_capacity(self.version_by_user.len());

        for (user_id, (version, platform)) in self.version_by_user {
            let version_platform = format!("{version}-{platform}");
            *usage.version.entry(version.to_string()).or_insert(0) += 1;
            *usage.platform.entry(platform).or_insert(0) += 1;
            *usage.version_platform.entry(version_platform).or_insert(0) += 1;
            unique_users.insert(user_id);
        }

        DailyAggregate {
            date: self.date,
            unique_users,
            sessions: self.sessions,
            errors: self.errors,
            usage,
            parse,
        }
    }
}
