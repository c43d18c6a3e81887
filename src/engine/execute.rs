// src/engine/execute.rs

//! Process executor.
//!
//! Spawns the requested binary with stdin detached, waits for it to exit and
//! buffers both output streams in memory. There is no timeout and no size
//! cap: a hung child hangs the caller, large output is held in full.

use std::process::{ExitStatus, Stdio};
use tokio::process::Command as TokioCommand;

use crate::engine::{CapturedOutput, Execution};

/// Run `binary_path` with `args` and capture everything it writes.
///
/// Never returns an error: failures to start the process (missing file,
/// not executable, permission denied, ...) come back as
/// [`Execution::SpawnFailed`] with the OS error text.
pub async fn execute_binary(binary_path: &str, args: &[String]) -> Execution {
    let mut cmd = TokioCommand::new(binary_path);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            return Execution::SpawnFailed {
                reason: e.to_string(),
            }
        }
    };

    // Reads both pipes concurrently, so a chatty stderr cannot deadlock stdout.
    match child.wait_with_output().await {
        Ok(output) => Execution::Completed(CapturedOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            status: Some(output.status),
        }),
        Err(e) => Execution::SpawnFailed {
            reason: format!("failed while waiting for process: {}", e),
        },
    }
}

/// Exit code for logging, `None` when the child was killed by a signal.
pub fn exit_code(status: Option<ExitStatus>) -> Option<i32> {
    status.and_then(|s| s.code())
}
