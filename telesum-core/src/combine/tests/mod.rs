mod combiner_tests;
mod windows_tests;

use crate::ingest::{ErrorEvent, ParseReport, SystemInfo, TelemetryRecord};
use crate::summary::{DailyAggregate, DailySummarizer};
use chrono::{Days, NaiveDate};

/// Helper: the n-th day after 2016-08-01
pub(super) fn date(n: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 8, 1).unwrap() + Days::new(n)
}

/// Helper: a session report, optionally crashed
pub(super) fn session(user: &str, version: &str, crashed: bool) -> TelemetryRecord {
    TelemetryRecord {
        user_id: Some(user.to_string()),
        version: Some(version.to_string()),
        system: Some(SystemInfo {
            os_platform: Some("linux".to_string()),
        }),
        uncaught_errors: crashed.then(|| {
            vec![ErrorEvent {
                message: Some(format!("crash in {version}")),
                stack: Some("at main.js".to_string()),
                process: Some("main".to_string()),
                version: Some(version.to_string()),
            }]
        }),
    }
}

/// Helper: aggregate for the n-th day from raw reports
pub(super) fn day_of(n: u64, records: Vec<TelemetryRecord>) -> DailyAggregate {
    let mut summarizer = DailySummarizer::new(date(n));
    for r in records {
        summarizer.push(r);
    }
    summarizer.finish(ParseReport::default())
}

/// Helper: aggregate for the n-th day where each user had one clean session
pub(super) fn users_day(n: u64, users: &[&str]) -> DailyAggregate {
    day_of(
        n,
        users.iter().map(|u| session(u, "0.14.0", false)).collect(),
    )
}
