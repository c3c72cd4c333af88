use thiserror::Error;

/// Message reported when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A fault while reading process diagnostics.
///
/// `Failed` and `Unknown` are for other `DiagnosticsSource` implementations
/// that surface free-form or message-less failures.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("cannot determine current pid: {0}")]
    Pid(&'static str),

    #[error("process {0} is not visible to the system probe")]
    ProcessNotFound(String),

    #[error("{0}")]
    Failed(String),

    #[error("Unknown error")]
    Unknown,
}

impl DiagnosticError {
    /// Human-readable message, never empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}
