//! Per-day summarization
//!
//! A day file can hold millions of reports. [`DailySummarizer`] folds them,
//! one at a time, into a [`DailyAggregate`] of a few KB: who was active,
//! how many sessions crashed, which versions and platforms were in use, and
//! every distinct uncaught error.

mod daily;
mod types;
mod version;

pub use daily::{
    DailySummarizer, MISSING_ERROR_MESSAGE, UNKNOWN_PLATFORM, UNREDACTED_STACK_MARKER,
    effective_error_version, error_key,
};
pub use types::{DailyAggregate, ErrorAggregate, SessionCounts, Sessions, Usage};
pub use version::{AppVersion, PRE_VERSIONED};
