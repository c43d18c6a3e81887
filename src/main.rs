// src/main.rs

//! binexpose
//!
//! Small HTTP front door for a local binary: `POST /execute` spawns the
//! requested executable, waits for it, and answers with whatever it wrote
//! as `{"stdout": ..}`, `{"stderr": ..}` or `{"error": ..}`.
//!
//! Responsibilities of this file:
//! - Load `.env` and initialise logging
//! - Parse CLI arguments
//! - Hand off execution to the runner
//!
//! There is intentionally *no business logic* here.

mod cli;
mod config;
mod engine;
mod execution_id;
mod runner;
mod runtime;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Program entry point.
///
/// Uses Tokio because both the HTTP server and the child process
/// handling are async.
#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env, mainly for RUST_LOG
    dotenvy::dotenv().ok();

    // Logs go to stderr so `exec` keeps stdout for the JSON reply
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments (serve / exec / flags)
    let cli = cli::Cli::parse();

    // Delegate execution to the runner
    runner::run(cli).await
}
