use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    // IO / Discovery
    #[error("failed to read telemetry directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read telemetry log {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("telemetry log {path} is not named after a calendar date")]
    InvalidDate { path: PathBuf },

    // Day sequence
    #[error("missing telemetry for {missing} (next log on file is {date})")]
    DayGap { missing: NaiveDate, date: NaiveDate },

    #[error("telemetry for {date} is out of order (follows {previous})")]
    OutOfOrder { date: NaiveDate, previous: NaiveDate },

    #[error("day summarization task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    // Output
    #[error("failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write summary {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummarizeError {
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
