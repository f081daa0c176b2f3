use crate::summary::{AppVersion, DailyAggregate, SessionCounts, Usage};
use std::collections::HashSet;

/// Users active at least once in the `n` days ending at `days[index]`.
fn window_users(days: &[DailyAggregate], index: usize, n: usize) -> HashSet<&str> {
    days[index + 1 - n..=index]
        .iter()
        .flat_map(|d| d.unique_users.iter().map(String::as_str))
        .collect()
}

/// Distinct users in the `n` days ending at `days[index]`, or `None` when
/// fewer than `n` days are on record.
pub fn actives(days: &[DailyAggregate], index: usize, n: usize) -> Option<u64> {
    if index + 1 < n {
        return None;
    }
    Some(window_users(days, index, n).len() as u64)
}

/// Fraction of `cohort` seen again in the `n` days ending at `days[index]`.
///
/// An empty cohort has no retention; the caller handles the history check.
pub fn retention(
    days: &[DailyAggregate],
    index: usize,
    n: usize,
    cohort: &HashSet<&str>,
) -> Option<f64> {
    if cohort.is_empty() || index + 1 < n {
        return None;
    }

    let window = window_users(days, index, n);
    let cohort_size = cohort.len();
    let users_lost = cohort_size - cohort.iter().filter(|u| window.contains(*u)).count();

    Some((cohort_size - users_lost) as f64 / cohort_size as f64)
}

/// Newest real version that had active users in `usage`, never older than
/// the first versioned release.
pub fn latest_version(usage: &Usage) -> AppVersion {
    usage
        .version
        .keys()
        .map(|v| AppVersion::new(v.as_str()))
        .filter(|v| !v.is_pre_versioned())
        .fold(AppVersion::first_versioned(), |latest, v| {
            if v > latest { v } else { latest }
        })
}

/// Errored over total sessions in the `n` days ending at `days[index]`.
///
/// With `latest_only`, each day contributes only the sessions that ran that
/// day's [`latest_version`]. `None` while the window is incomplete or has
/// no sessions.
pub fn error_rate(
    days: &[DailyAggregate],
    index: usize,
    n: usize,
    latest_only: bool,
) -> Option<f64> {
    if index + 1 < n {
        return None;
    }

    let mut total = 0u64;
    let mut errored = 0u64;

    for day in &days[index + 1 - n..=index] {
        let sessions = if latest_only {
            day.sessions
                .by_version
                .get(&latest_version(&day.usage))
                .copied()
                .unwrap_or_default()
        } else {
            SessionCounts {
                total: day.sessions.total,
                errored: day.sessions.errored,
            }
        };

        total += sessions.total;
        errored += sessions.errored;
    }

    (total > 0).then(|| errored as f64 / total as f64)
}
