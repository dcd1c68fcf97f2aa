use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A timestamp exactly as it appears in the export
///
/// The raw JSON value is echoed back untouched; [`Timestamp::parse`] is only used where
/// an instant is actually needed (statistics, transcript headers).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(Value);

impl Timestamp {
    /// Interpret the value as an instant
    ///
    /// Accepts integer Unix milliseconds, RFC3339 strings, and offset-less
    /// `T`- or space-separated date-times (read as UTC). Anything else yields `None`.
    pub fn parse(&self) -> Option<DateTime<Utc>> {
        match &self.0 {
            Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
            Value::String(s) => s.parse::<DateTime<Utc>>().ok().or_else(|| {
                NAIVE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|naive| naive.and_utc())
            }),
            _ => None,
        }
    }

    /// Formatted instant, falling back to the raw text when it does not parse
    pub fn display(&self, format: &str) -> String {
        match (self.parse(), &self.0) {
            (Some(ts), _) => ts.format(format).to_string(),
            (None, Value::String(s)) => s.clone(),
            (None, Value::Null) => "unknown".to_string(),
            (None, other) => other.to_string(),
        }
    }
}
