use crate::summary::{ErrorAggregate, Usage};
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the final summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub actives: Actives,
    pub installs: u64,
    pub retention: Retention,
    pub usage: Usage,
    pub error_rates: ErrorRates,
    pub errors: Vec<ErrorAggregate>,
}

/// Distinct users over trailing windows. `None` until the window is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Actives {
    pub today: Option<u64>,
    pub last7: Option<u64>,
    pub last30: Option<u64>,
}

/// Share of an earlier day's new users that are active again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Retention {
    pub day1: Option<f64>,
    pub day7: Option<f64>,
    pub day28: Option<f64>,
    pub day30to60: Option<f64>,
}

/// Errored sessions over all sessions. The `latest` variants only count
/// sessions on the newest version in use that day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ErrorRates {
    pub today: Option<f64>,
    pub last7: Option<f64>,
    #[serde(rename = "today-latest")]
    pub today_latest: Option<f64>,
    #[serde(rename = "last7-latest")]
    pub last7_latest: Option<f64>,
}
