use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch telemetry root holding day files.
pub struct TelemetryDir {
    dir: TempDir,
}

impl TelemetryDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn summary_path(&self) -> PathBuf {
        self.root().join("summary.json")
    }

    /// Writes `YYYY-MM-DD.log` with one line per entry.
    pub fn write_day(&self, date: &str, lines: &[String]) -> PathBuf {
        let path = self.root().join(format!("{date}.log"));
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(&path, text).unwrap();
        path
    }
}

impl Default for TelemetryDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A clean session report. `version: None` mimics apps older than 0.12.
pub fn report(user: &str, version: Option<&str>, platform: &str) -> String {
    let mut record = json!({
        "userID": user,
        "system": { "osPlatform": platform, "osRelease": "15.6.0" },
        "ip": "10.0.0.1",
    });
    if let Some(version) = version {
        record["version"] = json!(version);
    }
    record.to_string()
}

/// A session report with one uncaught error.
pub fn crash_report(user: &str, version: &str, platform: &str, message: &str) -> String {
    json!({
        "userID": user,
        "version": version,
        "system": { "osPlatform": platform },
        "uncaughtErrors": [{
            "message": message,
            "stack": "at Object.<anonymous> (renderer/main.js:1:1)",
            "process": "renderer",
            "version": version,
        }],
    })
    .to_string()
}
