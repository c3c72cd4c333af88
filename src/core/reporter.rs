use actix_web::http::StatusCode;
use chrono::Utc;

use crate::config::Config;
use crate::models::response::{HealthReport, MemoryUsage};

use super::diagnostics::{DiagnosticsSource, MemoryBytes};
use super::error::DiagnosticError;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Result of a health read. Degraded means the read itself failed.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthOutcome {
    Ok(HealthReport),
    Degraded(HealthReport),
}

impl HealthOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HealthOutcome::Ok(_) => StatusCode::OK,
            HealthOutcome::Degraded(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn report(&self) -> &HealthReport {
        match self {
            HealthOutcome::Ok(report) | HealthOutcome::Degraded(report) => report,
        }
    }

    pub fn into_report(self) -> HealthReport {
        match self {
            HealthOutcome::Ok(report) | HealthOutcome::Degraded(report) => report,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, HealthOutcome::Degraded(_))
    }
}

/// Assembles health reports from injected config and a diagnostics source.
pub struct HealthReporter {
    config: Config,
    source: Box<dyn DiagnosticsSource>,
}

impl HealthReporter {
    pub fn new<S>(config: Config, source: S) -> Self
    where
        S: DiagnosticsSource + 'static,
    {
        Self {
            config,
            source: Box::new(source),
        }
    }

    /// Never fails: diagnostic errors become a degraded report.
    pub fn get_health(&self) -> HealthOutcome {
        match self.collect() {
            Ok(report) => HealthOutcome::Ok(report),
            Err(e) => {
                let message = e.message();
                log::warn!("⚠️  Health diagnostics unavailable: {}", message);
                HealthOutcome::Degraded(HealthReport::error(Utc::now(), message))
            }
        }
    }

    fn collect(&self) -> Result<HealthReport, DiagnosticError> {
        let timestamp = Utc::now();
        let uptime = self.source.uptime_seconds()?;
        let memory = self.source.memory_bytes()?;

        Ok(HealthReport::ok(
            timestamp,
            self.config.environment.clone(),
            self.config.version.clone(),
            uptime.max(0.0),
            to_megabytes(memory),
        ))
    }
}

fn to_megabytes(memory: MemoryBytes) -> MemoryUsage {
    MemoryUsage {
        used: bytes_to_megabytes(memory.used),
        total: bytes_to_megabytes(memory.total),
    }
}

/// Bytes to megabytes, rounded half away from zero to two decimals.
pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    ((bytes as f64 / BYTES_PER_MEGABYTE) * 100.0).round() / 100.0
}
