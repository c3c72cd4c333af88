use std::time::Instant;

use sysinfo::System;

use super::error::DiagnosticError;

/// Raw process memory figures in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBytes {
    pub used: u64,
    pub total: u64,
}

/// Source of process-local diagnostics read by the reporter.
///
/// Implementations must not hold shared mutable state: every call is an
/// independent read of the current process.
pub trait DiagnosticsSource: Send + Sync {
    fn uptime_seconds(&self) -> Result<f64, DiagnosticError>;

    fn memory_bytes(&self) -> Result<MemoryBytes, DiagnosticError>;
}

/// Probes the running process through `sysinfo`.
#[derive(Debug, Clone)]
pub struct ProcessDiagnostics {
    started_at: Instant,
}

impl ProcessDiagnostics {
    /// Uptime is counted from the moment the probe is created.
    pub fn new() -> Self {
        Self { started_at: Instant::now() }
    }
}

impl Default for ProcessDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsSource for ProcessDiagnostics {
    fn uptime_seconds(&self) -> Result<f64, DiagnosticError> {
        Ok(self.started_at.elapsed().as_secs_f64())
    }

    fn memory_bytes(&self) -> Result<MemoryBytes, DiagnosticError> {
        let pid = sysinfo::get_current_pid().map_err(DiagnosticError::Pid)?;

        // Fresh System per call, refreshing only our own pid
        let mut system = System::new();
        if !system.refresh_process(pid) {
            return Err(DiagnosticError::ProcessNotFound(pid.to_string()));
        }

        let process = system
            .process(pid)
            .ok_or_else(|| DiagnosticError::ProcessNotFound(pid.to_string()))?;

        Ok(MemoryBytes {
            used: process.memory(),
            total: process.virtual_memory(),
        })
    }
}
