// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "binexpose.yaml";

/// Root configuration loaded from `binexpose.yaml`.
///
/// Every field has a default, so an empty file (or no file at all) gives a
/// server on `0.0.0.0:12345` running the build artifact placeholder.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Executor settings
    #[serde(default)]
    pub execute: ExecuteConfig,
}

/// Listener section.
///
/// Example:
///
/// server:
///   host: 0.0.0.0
///   port: 12345
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Executor section.
///
/// Example:
///
/// execute:
///   default_binary_path: ./dist/add2vals
#[derive(Debug, Deserialize)]
pub struct ExecuteConfig {
    /// Binary run when a request omits `binary_path`.
    ///
    /// Taken as-is. Placeholders such as `${env.BUILD_ID}` are not expanded.
    #[serde(default = "default_binary_path")]
    pub default_binary_path: String,
}

impl Default for ExecuteConfig {
    fn default() -> Self {
        Self {
            default_binary_path: default_binary_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12345
}

pub fn default_binary_path() -> String {
    "${env.BUILD_ID}/sources/dist/add2vals".to_string()
}

impl Config {
    /// Load and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_yaml(&raw)
    }

    /// Resolve the config for a CLI invocation.
    ///
    /// - explicit path: must exist
    /// - no path: `./binexpose.yaml` if present, built-in defaults otherwise
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        Self::resolve_in(Path::new("."), path)
    }

    /// Same as [`Config::resolve`], looking for the default file in `dir`.
    pub fn resolve_in(dir: &Path, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_yaml(raw: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as "all defaults".
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(raw).context("Failed to parse YAML config")
    }

    /// Host and port the server binds to.
    ///
    /// `host` may be an IP literal or a name such as `localhost`.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.server.host.as_str(), self.server.port)
    }
}
