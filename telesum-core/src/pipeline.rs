//! Summarization pipeline
//!
//! ```text
//! select_day_files
//! (bounded parallel) read file, parse_day, DailySummarizer
//! DailyAggregate, in file order
//! combine_days
//! DaySummary + fetch_releases
//! Summary
//! ```
//!
//! Parsing days is independent per file and runs on blocking worker tasks,
//! at most `max_concurrent_reads` at once. The cross-day combination needs
//! every day, in order, so it only starts once all files are done.

use crate::combine::combine_days;
use crate::error::SummarizeError;
use crate::ingest::{DayFile, parse_day, select_day_files};
use crate::output::Summary;
use crate::releases::{ReleaseSource, fetch_releases, total_installs};
use crate::summary::{DailyAggregate, DailySummarizer};
use chrono::NaiveDate;
use futures::{StreamExt, TryStreamExt};
use std::fs;
use std::path::Path;

/// Reads and summarizes one day file.
pub fn summarize_day_file(file: &DayFile) -> Result<DailyAggregate, SummarizeError> {
    let name = file.file_name();

    tracing::info!(file = %name, "Reading day file");
    let text =
        fs::read_to_string(&file.path).map_err(|e| SummarizeError::read_file(&file.path, e))?;

    let mut summarizer = DailySummarizer::new(file.date);
    let report = parse_day(&name, &text, |record| summarizer.push(record));

    if report.dropped > 0 {
        tracing::warn!(
            file = %name,
            dropped = report.dropped,
            attempted = report.attempted,
            "Dropped unparseable lines"
        );
    }
    tracing::info!(file = %name, rows = report.read, "Parsed day file");

    Ok(summarizer.finish(report))
}

/// Summarizes every day file, at most `max_concurrent` at a time.
///
/// Results come back in the order of `files`. The first failure fails the
/// whole batch.
pub async fn summarize_days(
    files: Vec<DayFile>,
    max_concurrent: usize,
) -> Result<Vec<DailyAggregate>, SummarizeError> {
    tracing::info!(files = files.len(), "Summarizing telemetry log files");

    futures::stream::iter(files)
        .map(|file| async move {
            tokio::task::spawn_blocking(move || summarize_day_file(&file)).await?
        })
        .buffered(max_concurrent.max(1))
        .try_collect()
        .await
}

/// Builds the complete summary for the given day files.
///
/// Release metadata is fetched only after the telemetry part succeeded, and
/// its failure leaves the releases section empty.
pub async fn build_summary(
    files: Vec<DayFile>,
    max_concurrent: usize,
    releases: &dyn ReleaseSource,
) -> Result<Summary, SummarizeError> {
    let days = summarize_days(files, max_concurrent).await?;
    let telemetry = combine_days(&days)?;
    drop(days);

    let releases = fetch_releases(releases).await;
    let total_installs = total_installs(&releases);

    Ok(Summary {
        telemetry,
        releases,
        total_installs,
    })
}

/// Convenience for callers that already know the root: select, then build.
pub async fn summarize_root(
    root: &Path,
    until: Option<NaiveDate>,
    max_concurrent: usize,
    releases: &dyn ReleaseSource,
) -> Result<Summary, SummarizeError> {
    let files = select_day_files(root, until)?;
    build_summary(files, max_concurrent, releases).await
}
