use crate::error::SummarizeError;
use chrono::NaiveDate;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Strict day file name: four, two and two digits, then `.log`.
pub const DAY_FILE_PATTERN: &str = "[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9].log";

/// A daily telemetry log and the UTC day it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFile {
    pub date: NaiveDate,
    pub path: PathBuf,
}

impl DayFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Lists the day files in `root`, oldest first.
///
/// Files named after days later than `until` are left out. A name that fits
/// the pattern but is not a calendar day (e.g. `2016-13-40.log`) is an error,
/// since the day sequence can't be checked with it in the set.
///
/// # Errors
///
/// Returns `SummarizeError::ReadDir` if the directory cannot be listed and
/// `SummarizeError::InvalidDate` for a name that is not a real date.
pub fn select_day_files(
    root: &Path,
    until: Option<NaiveDate>,
) -> Result<Vec<DayFile>, SummarizeError> {
    let pattern = Pattern::new(DAY_FILE_PATTERN).expect("day file pattern is a valid glob");

    let entries = fs::read_dir(root).map_err(|e| SummarizeError::read_dir(root, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SummarizeError::read_dir(root, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if pattern.matches(&name) {
            names.push(name);
        }
    }

    // Fixed-width names: lexical order is chronological order.
    names.sort();

    let mut files = Vec::with_capacity(names.len());
    for name in names {
        let path = root.join(&name);
        let date = NaiveDate::parse_from_str(&name[..10], "%Y-%m-%d")
            .map_err(|_| SummarizeError::InvalidDate { path: path.clone() })?;

        if until.is_some_and(|until| date > until) {
            continue;
        }
        files.push(DayFile { date, path });
    }

    Ok(files)
}
