use super::{date, day_of, session, users_day};
use crate::combine::{CrossDayCombiner, check_consecutive, combine_days};
use crate::error::SummarizeError;
use crate::summary::DailyAggregate;

use pretty_assertions::assert_eq;

/// Helper: `n` consecutive days, user `u{k}` active on day `k` and every
/// day of the same week, plus a daily returning user.
fn history(n: u64) -> Vec<DailyAggregate> {
    (0..n)
        .map(|i| {
            let fresh = format!("u{i}");
            let weekly = format!("w{}", i / 7);
            users_day(i, &[fresh.as_str(), weekly.as_str(), "regular"])
        })
        .collect()
}

#[test]
fn two_day_installs_and_actives() {
    // Arrange
    let days = vec![users_day(0, &["A", "B"]), users_day(1, &["B", "C"])];

    // Act
    let summary = combine_days(&days).unwrap();

    // Assert
    assert_eq!(summary[0].installs, 2);
    assert_eq!(summary[1].installs, 1);
    assert_eq!(summary[1].actives.today, Some(2));
    assert_eq!(summary[1].actives.last7, None);
    assert_eq!(summary[1].actives.last30, None);
}

#[test]
fn last7_is_union_once_a_week_exists() {
    // Arrange
    let mut days = vec![users_day(0, &["A", "B"]), users_day(1, &["B", "C"])];
    days.extend((2..7).map(|i| users_day(i, &["B"])));

    // Act
    let summary = combine_days(&days).unwrap();

    // Assert
    assert_eq!(summary[5].actives.last7, None);
    assert_eq!(summary[6].actives.last7, Some(3));
    assert_eq!(summary[6].actives.today, Some(1));
}

#[test]
fn installs_sum_to_all_users_ever_seen() {
    // Arrange
    let days = history(40);

    // Act
    let summary = combine_days(&days).unwrap();
    let mut combiner = CrossDayCombiner::new(&days);
    combiner.by_ref().for_each(drop);

    // Assert
    let installs: u64 = summary.iter().map(|d| d.installs).sum();
    assert_eq!(installs as usize, combiner.users_seen());
    // u0..u39, w0..w5, regular
    assert_eq!(installs, 40 + 6 + 1);
}

#[test]
fn actives_grow_with_the_window() {
    let summary = combine_days(&history(45)).unwrap();

    for row in summary.iter().skip(29) {
        let a = row.actives;
        assert!(a.today.unwrap() <= a.last7.unwrap());
        assert!(a.last7.unwrap() <= a.last30.unwrap());
    }
}

#[test]
fn retention_is_null_until_history_allows() {
    let summary = combine_days(&history(62)).unwrap();

    for (i, row) in summary.iter().enumerate() {
        let r = row.retention;
        assert_eq!(r.day1.is_none(), i < 2, "day1 at {i}");
        assert_eq!(r.day7.is_none(), i < 8, "day7 at {i}");
        assert_eq!(r.day28.is_none(), i < 29, "day28 at {i}");
        assert_eq!(r.day30to60.is_none(), i < 61, "day30to60 at {i}");

        for value in [r.day1, r.day7, r.day28, r.day30to60].into_iter().flatten() {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}

#[test]
fn day1_retention_tracks_yesterdays_new_users() {
    // Arrange: day 1 installs {B, C, D, E}; on day 2 only B and C return
    let days = vec![
        users_day(0, &["A"]),
        users_day(1, &["A", "B", "C", "D", "E"]),
        users_day(2, &["B", "C", "Z"]),
    ];

    // Act
    let summary = combine_days(&days).unwrap();

    // Assert
    assert_eq!(summary[2].retention.day1, Some(0.5));
}

#[test]
fn retention_of_empty_cohort_is_null() {
    // Arrange: nobody new on day 1
    let days = vec![
        users_day(0, &["A"]),
        users_day(1, &["A"]),
        users_day(2, &["A"]),
    ];

    // Act
    let summary = combine_days(&days).unwrap();

    // Assert
    assert_eq!(summary[2].retention.day1, None);
}

#[test]
fn errors_sorted_by_count_then_key() {
    // Arrange
    let day = day_of(
        0,
        vec![
            session("a", "0.15.0", true),
            session("b", "0.14.0", true),
            session("c", "0.14.0", true),
            session("d", "0.13.0", true),
        ],
    );

    // Act
    let summary = combine_days(&[day]).unwrap();

    // Assert
    let keys: Vec<_> = summary[0].errors.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["crash in 0.14.0", "crash in 0.13.0", "crash in 0.15.0"]);
}

#[test]
fn gap_in_days_is_rejected_with_missing_date() {
    // Arrange
    let days = vec![users_day(0, &["A"]), users_day(1, &["A"]), users_day(3, &["A"])];

    // Act
    let err = combine_days(&days).unwrap_err();

    // Assert
    match err {
        SummarizeError::DayGap { missing, date: next } => {
            assert_eq!(missing, date(2));
            assert_eq!(next, date(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repeated_day_is_rejected() {
    let days = vec![users_day(0, &["A"]), users_day(0, &["B"])];

    let err = check_consecutive(&days).unwrap_err();

    assert!(matches!(err, SummarizeError::OutOfOrder { .. }));
}

#[test]
fn empty_history_combines_to_nothing() {
    let summary = combine_days(&[]).unwrap();
    assert!(summary.is_empty());
}

#[test]
fn date_and_usage_are_carried_over() {
    // Arrange
    let days = vec![users_day(0, &["A", "B"])];

    // Act
    let summary = combine_days(&days).unwrap();

    // Assert
    assert_eq!(summary[0].date, date(0));
    assert_eq!(summary[0].usage, days[0].usage);
}
