//! Cross-day combination
//!
//! Turns the ordered per-day aggregates into the final per-day rows. Unlike
//! the per-day stage this pass is strictly sequential: installs and
//! retention depend on every earlier day having been folded in first.

mod combiner;
#[cfg(test)]
mod tests;
mod types;
mod windows;

pub use combiner::{CrossDayCombiner, check_consecutive, combine_days};
pub use types::{Actives, DaySummary, ErrorRates, Retention};
pub use windows::{actives, error_rate, latest_version, retention};
