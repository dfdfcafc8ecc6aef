/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
///
/// Every error is terminal for a run; nothing is retried.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MlqError {
    #[error("Malformed input at line {line}: {reason}")]
    #[diagnostic(
        code(mlq::malformed_input),
        help("Records are `name;burst_time;arrival_time;queue_id;priority` with queue_id in 1..=3.")
    )]
    MalformedInput { line: usize, reason: String },

    #[error("Invalid workload: {0}")]
    #[diagnostic(
        code(mlq::invalid_workload),
        help("Process names must be unique and burst times must be positive.")
    )]
    InvalidWorkload(String),

    #[error("Precondition failed: {0}")]
    #[diagnostic(
        code(mlq::precondition),
        help("Metrics can only be computed for finished processes. This indicates a dispatcher bug.")
    )]
    Precondition(String),

    #[error("Invariant violated: {0}")]
    #[diagnostic(
        code(mlq::invariant_violation),
        help("The simulation was aborted to avoid reporting misleading metrics. Please report this issue.")
    )]
    InvariantViolation(String),

    #[error("Empty workload: no processes to simulate")]
    #[diagnostic(
        code(mlq::empty_workload),
        help("Provide at least one non-comment record in the input file.")
    )]
    EmptyWorkload,

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(mlq::configuration),
        help("Round-robin quanta must be positive integers.")
    )]
    Configuration(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(mlq::io),
        help("Filesystem operation failed. Check the path and file permissions.")
    )]
    Io(String),
}

impl MlqError {
    /// Shorthand for a malformed record at `line`
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        MlqError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for MlqError {
    fn from(err: std::io::Error) -> Self {
        MlqError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MlqError {
    fn from(err: serde_json::Error) -> Self {
        MlqError::Configuration(err.to_string())
    }
}
