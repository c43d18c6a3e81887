// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Expose a local binary over HTTP.
///
/// `binexpose.yaml` provides defaults.
/// CLI flags only override config values.
#[derive(Parser, Debug)]
#[command(
    name = "binexpose",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// All supported CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server.
    ///
    /// Exposes `POST /execute` and `GET /health`.
    Serve {
        /// Path to config file
        ///
        /// Defaults to ./binexpose.yaml when it exists.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override listen host
        #[arg(long)]
        host: Option<String>,

        /// Override listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override the binary run when a request has no `binary_path`
        #[arg(long)]
        default_binary: Option<String>,
    },

    /// Run a binary once and print the JSON reply `/execute` would give.
    ///
    /// Example:
    /// binexpose exec /bin/echo -- hello
    Exec {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Binary to run. Defaults to the configured default binary.
        binary: Option<String>,

        /// Arguments passed to the binary
        #[arg(last = true)]
        args: Vec<String>,
    },
}
