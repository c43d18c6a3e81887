// src/runner.rs

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::engine::run_execution;
use crate::runtime;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Entry point from `main.rs`.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve {
            config,
            host,
            port,
            default_binary,
        } => {
            let mut cfg = Config::resolve(config.as_deref())?;
            apply_overrides(&mut cfg, host, port, default_binary);

            runtime::serve(cfg).await
        }

        Command::Exec {
            config,
            binary,
            args,
        } => exec_once(config, binary, args).await,
    }
}

/// CLI flags take precedence over config values.
fn apply_overrides(
    cfg: &mut Config,
    host: Option<String>,
    port: Option<u16>,
    default_binary: Option<String>,
) {
    if let Some(h) = host {
        cfg.server.host = h;
    }
    if let Some(p) = port {
        cfg.server.port = p;
    }
    if let Some(b) = default_binary {
        cfg.execute.default_binary_path = b;
    }
}

/* ---------------- one-shot exec ---------------- */

async fn exec_once(config: Option<PathBuf>, binary: Option<String>, args: Vec<String>) -> Result<()> {
    let cfg = Config::resolve(config.as_deref())?;

    // Same body the HTTP endpoint returns, one line on stdout.
    println!("{}", exec_output(&cfg, binary, &args).await?);

    Ok(())
}

/// Run once and serialise the reply exactly as `/execute` would.
async fn exec_output(cfg: &Config, binary: Option<String>, args: &[String]) -> Result<String> {
    let binary = binary.unwrap_or_else(|| cfg.execute.default_binary_path.clone());

    let response = run_execution(&binary, args).await;

    serde_json::to_string(&response).context("Failed to serialize response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let mut cfg = Config::default();

        apply_overrides(
            &mut cfg,
            Some("127.0.0.1".into()),
            Some(8080),
            Some("/usr/local/bin/tool".into()),
        );

        assert_eq!(cfg.listen_addr(), ("127.0.0.1", 8080));
        assert_eq!(cfg.execute.default_binary_path, "/usr/local/bin/tool");
    }

    #[test]
    fn missing_overrides_keep_config_values() {
        let mut cfg = Config::default();
        cfg.server.port = 9000;
        cfg.execute.default_binary_path = "/from/config".into();

        apply_overrides(&mut cfg, None, None, None);

        assert_eq!(cfg.listen_addr(), ("0.0.0.0", 9000));
        assert_eq!(cfg.execute.default_binary_path, "/from/config");
    }

    #[test]
    fn overrides_apply_independently() {
        let mut cfg = Config::default();

        apply_overrides(&mut cfg, None, Some(4000), None);

        assert_eq!(cfg.listen_addr(), ("0.0.0.0", 4000));
        assert_eq!(
            cfg.execute.default_binary_path,
            crate::config::default_binary_path()
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exec_prints_endpoint_body() {
        let cfg = Config::default();

        let out = exec_output(&cfg, Some("/bin/echo".into()), &["hello".to_string()])
            .await
            .unwrap();

        assert_eq!(out, r#"{"stdout":"hello\n"}"#);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn exec_falls_back_to_configured_binary() {
        let mut cfg = Config::default();
        cfg.execute.default_binary_path = "/bin/echo".into();

        let out = exec_output(&cfg, None, &["from".to_string(), "config".to_string()])
            .await
            .unwrap();

        assert_eq!(out, r#"{"stdout":"from config\n"}"#);
    }

    #[tokio::test]
    async fn exec_missing_binary_prints_failure() {
        let cfg = Config::default();

        let out = exec_output(&cfg, Some("/bin/no-such-binary-xyz".into()), &[])
            .await
            .unwrap();

        assert_eq!(out, r#"{"error":"Failed to execute the binary."}"#);
    }
}
