use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// Process memory in megabytes, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryUsage {
    pub used: f64,
    pub total: f64,
}

/// Snapshot returned by `GET /health`. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemoryUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthReport {
    pub fn ok(
        timestamp: DateTime<Utc>,
        environment: Option<String>,
        version: String,
        uptime: f64,
        memory: MemoryUsage,
    ) -> Self {
        Self {
            status: HealthStatus::Ok,
            timestamp,
            environment,
            version: Some(version),
            uptime: Some(uptime),
            memory: Some(memory),
            error: None,
        }
    }

    pub fn error(timestamp: DateTime<Utc>, message: String) -> Self {
        Self {
            status: HealthStatus::Error,
            timestamp,
            environment: None,
            version: None,
            uptime: None,
            memory: None,
            error: Some(message),
        }
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
