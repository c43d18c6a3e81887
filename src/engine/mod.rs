use std::process::ExitStatus;

pub mod execute;
pub mod response;
pub mod run;

pub use execute::execute_binary;
pub use response::ExecuteResponse;
pub use run::run_execution;

/* ---------------- executor output ---------------- */

/// Everything a finished child wrote, buffered until it exited.
#[derive(Debug, Default)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,

    /// Exit status, only ever logged. Response selection ignores it.
    pub status: Option<ExitStatus>,
}

/// Outcome of a single executor call.
#[derive(Debug)]
pub enum Execution {
    /// The process started and ran to completion.
    Completed(CapturedOutput),

    /// The process could not be started. Both streams count as empty.
    SpawnFailed { reason: String },
}

impl Execution {
    /// Captured streams, or `None` if the process never started.
    pub fn captured(&self) -> Option<&CapturedOutput> {
        match self {
            Execution::Completed(out) => Some(out),
            Execution::SpawnFailed { .. } => None,
        }
    }
}
