pub mod diagnostics;
pub mod error;
pub mod reporter;

pub use diagnostics::{DiagnosticsSource, MemoryBytes, ProcessDiagnostics};
pub use error::DiagnosticError;
pub use reporter::{HealthOutcome, HealthReporter};
