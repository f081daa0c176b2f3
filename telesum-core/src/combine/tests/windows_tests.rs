use super::{day_of, session, users_day};
use crate::combine::{actives, error_rate, latest_version, retention};
use crate::summary::AppVersion;

use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn actives_needs_a_full_window() {
    let days = vec![users_day(0, &["A"]), users_day(1, &["B"])];

    assert_eq!(actives(&days, 1, 1), Some(1));
    assert_eq!(actives(&days, 1, 2), Some(2));
    assert_eq!(actives(&days, 1, 3), None);
}

#[test]
fn retention_counts_cohort_members_in_window() {
    // Arrange
    let days = vec![users_day(0, &["A", "B"]), users_day(1, &["B", "X"])];
    let cohort: HashSet<&str> = ["A", "B", "C", "D"].into_iter().collect();

    // Act / Assert
    assert_eq!(retention(&days, 1, 1, &cohort), Some(0.25));
    assert_eq!(retention(&days, 1, 2, &cohort), Some(0.5));
    assert_eq!(retention(&days, 1, 3, &cohort), None);
}

#[test]
fn latest_version_ignores_pre_versioned_and_has_a_floor() {
    let old = day_of(0, vec![session("a", "0.11.0", false)]);
    let mixed = day_of(
        0,
        vec![
            session("a", "2.3.0", false),
            session("b", "2.10.0-beta", false),
            session("c", "0.9.0", false),
        ],
    );

    assert_eq!(latest_version(&old.usage), AppVersion::first_versioned());
    assert_eq!(latest_version(&mixed.usage), AppVersion::new("2.10.0-beta"));
}

#[test]
fn error_rate_over_all_sessions() {
    // Arrange
    let days = vec![
        day_of(0, vec![session("a", "0.14.0", true), session("b", "0.14.0", false)]),
        day_of(1, vec![session("a", "0.14.0", false), session("b", "0.14.0", false)]),
    ];

    // Act / Assert
    assert_eq!(error_rate(&days, 0, 1, false), Some(0.5));
    assert_eq!(error_rate(&days, 1, 1, false), Some(0.0));
    assert_eq!(error_rate(&days, 1, 2, false), Some(0.25));
    assert_eq!(error_rate(&days, 1, 7, false), None);
}

#[test]
fn latest_only_error_rate_ignores_other_versions() {
    // Arrange: 2.3.0 is the newest version in use; older builds crash a lot
    let days = vec![day_of(
        0,
        vec![
            session("a", "2.3.0", true),
            session("b", "2.3.0", false),
            session("c", "2.3.0", false),
            session("d", "2.3.0", false),
            session("e", "2.2.0", true),
            session("f", "2.2.0", true),
        ],
    )];

    // Act
    let rate = error_rate(&days, 0, 1, true);

    // Assert
    assert_eq!(rate, Some(0.25));
    assert_eq!(error_rate(&days, 0, 1, false), Some(0.5));
}

#[test]
fn error_rate_without_sessions_is_null() {
    let days = vec![users_day(0, &[])];

    assert_eq!(error_rate(&days, 0, 1, false), None);
    assert_eq!(error_rate(&days, 0, 1, true), None);
}
