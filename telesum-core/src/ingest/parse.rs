use crate::ingest::types::TelemetryRecord;

/// Line accounting for one day file.
///
/// `attempted` always equals `read + dropped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub attempted: u64,
    pub read: u64,
    pub dropped: u64,
}

/// Parses the newline-delimited JSON `text` of one day file.
///
/// Each parsed record is handed to `sink` in file order. Lines that are not
/// JSON are logged and dropped; they never stop the rest of the file from
/// being read.
pub fn parse_day(
    file_name: &str,
    text: &str,
    mut sink: impl FnMut(TelemetryRecord),
) -> ParseReport {
    let mut report = ParseReport::default();

    let text = text.trim_end();
    if text.is_empty() {
        return report;
    }

    for (i, line) in text.split('\n').enumerate() {
        report.attempted += 1;

        match serde_json::from_str::<serde_json::Value>(line) {
            Ok(value) => {
                report.read += 1;
                sink(TelemetryRecord::from_value(value));
            }
            Err(e) => {
                report.dropped += 1;
                tracing::warn!(
                    file = file_name,
                    line = i + 1,
                    error = %e,
                    "Skipping invalid telemetry line"
                );
            }
        }
    }

    report
}
