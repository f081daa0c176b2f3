use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One telemetry report, as posted by the desktop app once per session.
///
/// Only the fields used for summarization are modelled; everything else on
/// the line is ignored. Fields are read leniently: a field of an unexpected
/// type is coerced where that is unambiguous and treated as absent
/// otherwise, so one odd field never costs the whole report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "userID", default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,

    /// Absent on reports from apps older than 0.12.
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    /// Absent on degenerate reports that carry nothing but the client ip.
    #[serde(default, deserialize_with = "lenient_system")]
    pub system: Option<SystemInfo>,

    #[serde(rename = "uncaughtErrors", default, deserialize_with = "lenient_errors")]
    pub uncaught_errors: Option<Vec<ErrorEvent>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemInfo {
    /// `win32`, `darwin` or `linux`
    #[serde(rename = "osPlatform", default, deserialize_with = "lenient_string")]
    pub os_platform: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEvent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub stack: Option<String>,

    /// `main` or `renderer`
    #[serde(default, deserialize_with = "lenient_string")]
    pub process: Option<String>,

    /// Only reported since 0.13.
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
}

impl TelemetryRecord {
    /// Reads a report out of any JSON value. Values that are not objects
    /// yield an empty report, which summarization skips as degenerate.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn errors(&self) -> &[ErrorEvent] {
        self.uncaught_errors.as_deref().unwrap_or_default()
    }
}

fn scalar_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_string(Value::deserialize(deserializer)?))
}

// Any non-null `system` marks a real report, even when its shape is off.
fn lenient_system<'de, D>(deserializer: D) -> Result<Option<SystemInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value => Some(serde_json::from_value(value).unwrap_or_default()),
    })
}

fn lenient_errors<'de, D>(deserializer: D) -> Result<Option<Vec<ErrorEvent>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
