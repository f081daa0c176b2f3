use crate::combine::DaySummary;
use crate::error::SummarizeError;
use crate::releases::{Installs, ReleaseInfo};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// The summary artifact consumed by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub telemetry: Vec<DaySummary>,
    pub releases: Vec<ReleaseInfo>,
    pub total_installs: Installs,
}

pub fn to_json(summary: &Summary) -> Result<String, SummarizeError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Replaces the artifact at `path` with `summary`.
///
/// The JSON goes to a temporary file next to `path` first and is renamed into
/// place, so a failed write leaves any previous artifact untouched.
pub fn write_summary(path: &Path, summary: &Summary) -> Result<(), SummarizeError> {
    let json = to_json(summary)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| SummarizeError::write(path, e))?;
    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| SummarizeError::write(path, e))?;
    tmp.persist(path)
        .map_err(|e| SummarizeError::write(path, e.error))?;

    tracing::info!(path = %path.display(), bytes = json.len(), "Wrote summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn empty_summary() -> Summary {
        Summary {
            telemetry: Vec::new(),
            releases: Vec::new(),
            total_installs: Installs::default(),
        }
    }

    #[test]
    fn writes_pretty_json_with_dashboard_field_names() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.json");

        // Act
        write_summary(&path, &empty_summary()).unwrap();

        // Assert
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"telemetry\": [],\n  \"releases\": [],\n  \"totalInstalls\": {\n    \"win32\": 0,\n    \"darwin\": 0,\n    \"linux\": 0,\n    \"total\": 0\n  }\n}"
        );
    }

    #[test]
    fn replaces_previous_artifact() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.json");
        fs::write(&path, "old").unwrap();

        // Act
        write_summary(&path, &empty_summary()).unwrap();

        // Assert
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with('{'));
        // No temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn fails_with_cause_when_directory_is_missing() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("summary.json");

        // Act
        let err = write_summary(&path, &empty_summary()).unwrap_err();

        // Assert
        match err {
            SummarizeError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }
}
