use std::time::Instant;

use crate::{
    engine::{execute::exit_code, execute_binary, ExecuteResponse, Execution},
    execution_id::ExecutionId,
    util::truncate_for_log,
};

/// Execute one binary and turn the outcome into its reply body.
///
/// Shared by the HTTP handler and the `exec` subcommand so both produce
/// byte-identical responses.
pub async fn run_execution(binary_path: &str, args: &[String]) -> ExecuteResponse {
    let execution_id = ExecutionId::new();
    let binary = truncate_for_log(binary_path, 256);

    tracing::info!(
        %execution_id,
        binary = %binary,
        args = args.len(),
        "execution started"
    );

    let start = Instant::now();
    let execution = execute_binary(binary_path, args).await;
    let duration_ms = start.elapsed().as_millis();

    let response = ExecuteResponse::from_execution(&execution);

    match &execution {
        Execution::Completed(out) => {
            tracing::info!(
                %execution_id,
                duration_ms,
                exit_code = ?exit_code(out.status),
                stdout_bytes = out.stdout.len(),
                stderr_bytes = out.stderr.len(),
                branch = response.branch(),
                "execution finished"
            );
        }
        Execution::SpawnFailed { reason } => {
            tracing::warn!(
                %execution_id,
                duration_ms,
                binary = %binary,
                reason = %reason,
                "failed to spawn binary"
            );
        }
    }

    response
}
