use crate::combine::types::{Actives, DaySummary, ErrorRates, Retention};
use crate::combine::windows::{actives, error_rate, retention};
use crate::error::SummarizeError;
use crate::summary::{DailyAggregate, ErrorAggregate};
use std::collections::HashSet;

/// (days back to the cohort, window length)
const RETENTION_DAY1: (usize, usize) = (1, 1);
const RETENTION_DAY7: (usize, usize) = (7, 1);
const RETENTION_DAY28: (usize, usize) = (28, 1);
const RETENTION_DAY30_TO_60: (usize, usize) = (60, 30);

/// Verifies that `days` covers consecutive calendar days, oldest first.
///
/// # Errors
///
/// `SummarizeError::DayGap` names the first missing day;
/// `SummarizeError::OutOfOrder` flags repeated or unsorted days.
pub fn check_consecutive(days: &[DailyAggregate]) -> Result<(), SummarizeError> {
    for pair in days.windows(2) {
        let (previous, date) = (pair[0].date, pair[1].date);
        let delta = (date - previous).num_days();

        if delta < 1 {
            return Err(SummarizeError::OutOfOrder { date, previous });
        }
        if delta > 1 {
            let missing = previous.succ_opt().unwrap_or(date);
            return Err(SummarizeError::DayGap { missing, date });
        }
    }
    Ok(())
}

/// Combines per-day aggregates into the final per-day rows.
///
/// The whole list is checked for gaps before anything is computed, since
/// every windowed metric after a gap would silently be wrong.
pub fn combine_days(days: &[DailyAggregate]) -> Result<Vec<DaySummary>, SummarizeError> {
    check_consecutive(days)?;

    let mut combiner = CrossDayCombiner::new(days);
    let summaries: Vec<_> = combiner.by_ref().collect();

    tracing::info!(
        days = summaries.len(),
        users = combiner.users_seen(),
        "Combined daily telemetry summaries"
    );

    Ok(summaries)
}

/// State carried across one left-to-right pass over the days.
///
/// Yields one [`DaySummary`] per day, in order.
pub struct CrossDayCombiner<'a> {
    days: &'a [DailyAggregate],

    // Every user seen so far
    seen: HashSet<&'a str>,

    // First-time users, per day folded so far
    installs_by_day: Vec<HashSet<&'a str>>,
}

impl<'a> CrossDayCombiner<'a> {
    pub fn new(days: &'a [DailyAggregate]) -> Self {
        Self {
            days,
            seen: HashSet::new(),
            installs_by_day: Vec::with_capacity(days.len()),
        }
    }

    /// Total distinct users folded in so far.
    pub fn users_seen(&self) -> usize {
        self.seen.len()
    }

    fn fold_day(&mut self, i: usize) -> DaySummary {
        let days = self.days;
        let day = &days[i];
        tracing::debug!(date = %day.date, "Processing day");

        let mut new_users = HashSet::new();
        for user in &day.unique_users {
            if self.seen.insert(user.as_str()) {
                new_users.insert(user.as_str());
            }
        }
        let installs = new_users.len() as u64;
        self.installs_by_day.push(new_users);

        let mut errors: Vec<ErrorAggregate> = day.errors.values().cloned().collect();
        errors.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));

        DaySummary {
            date: day.date,
            actives: Actives {
                today: actives(self.days, i, 1),
                last7: actives(self.days, i, 7),
                last30: actives(self.days, i, 30),
            },
            installs,
            retention: Retention {
                day1: self.retention(i, RETENTION_DAY1),
                day7: self.retention(i, RETENTION_DAY7),
                day28: self.retention(i, RETENTION_DAY28),
                day30to60: self.retention(i, RETENTION_DAY30_TO_60),
            },
            usage: day.usage.clone(),
            error_rates: ErrorRates {
                today: error_rate(self.days, i, 1, false),
                last7: error_rate(self.days, i, 7, false),
                today_latest: error_rate(self.days, i, 1, true),
                last7_latest: error_rate(self.days, i, 7, true),
            },
            errors,
        }
    }

    /// Needs one day of history before the cohort day, so the cohort's
    /// installs aren't inflated by users who merely predate the logs.
    fn retention(&self, i: usize, (offset, window): (usize, usize)) -> Option<f64> {
        if i <= offset {
            return None;
        }
        retention(self.days, i, window, &self.installs_by_day[i - offset])
    }
}

impl Iterator for CrossDayCombiner<'_> {
    type Item = DaySummary;

    fn next(&mut self) -> Option<DaySummary> {
        let i = self.installs_by_day.len();
        (i < self.days.len()).then(|| self.fold_day(i))
    }
}
