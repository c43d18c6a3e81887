// src/engine/response.rs
use serde::Serialize;

use crate::engine::Execution;
use crate::util::decode_stream;

/// Body returned when neither stream produced anything.
pub const EXECUTION_FAILED: &str = "Failed to execute the binary.";

/// JSON body of an `/execute` reply.
///
/// Serialises to exactly one key:
/// `{"stdout": ..}`, `{"stderr": ..}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecuteResponse {
    Stdout(String),
    Stderr(String),
    Error(String),
}

impl ExecuteResponse {
    /// Pick the reply for an execution.
    ///
    /// Priority chain, first match wins:
    /// 1. non-empty stdout (stderr is dropped)
    /// 2. non-empty stderr
    /// 3. the fixed failure message
    ///
    /// A spawn failure has no captured bytes, so it always ends up at 3.
    pub fn from_execution(execution: &Execution) -> Self {
        let Some(out) = execution.captured() else {
            return Self::failed();
        };

        if !out.stdout.is_empty() {
            Self::Stdout(decode_stream(&out.stdout))
        } else if !out.stderr.is_empty() {
            Self::Stderr(decode_stream(&out.stderr))
        } else {
            Self::failed()
        }
    }

    pub fn failed() -> Self {
        Self::Error(EXECUTION_FAILED.to_string())
    }

    /// Name of the populated key, used in log events.
    pub fn branch(&self) -> &'static str {
        match self {
            Self::Stdout(_) => "stdout",
            Self::Stderr(_) => "stderr",
            Self::Error(_) => "error",
        }
    }
}
