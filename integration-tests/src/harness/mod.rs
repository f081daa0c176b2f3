pub mod fixtures;
pub mod releases;
pub mod tracing;

pub use fixtures::{TelemetryDir, crash_report, report};
pub use releases::StubReleases;
pub use tracing::{CapturedEvent, init_test_tracing};
