//! Day file ingestion
//!
//! Telemetry arrives as one append-only file per UTC day, named
//! `YYYY-MM-DD.log`, with one JSON report per line. This module finds those
//! files and turns their lines into [`TelemetryRecord`]s, dropping (and
//! counting) any line that does not parse.
//!
//! ```text
//! telemetry root
//! select_day_files
//! DayFile
//! parse_day
//! TelemetryRecord
//! ```

mod parse;
mod select;
mod types;

pub use parse::{ParseReport, parse_day};
pub use select::{DAY_FILE_PATTERN, DayFile, select_day_files};
pub use types::{ErrorEvent, SystemInfo, TelemetryRecord};
