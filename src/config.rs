//! Configuration management.
//!
//! Handles loading configuration from a TOML file, with defaults for every
//! field so the demo runs with no config at all. CLI flags override file
//! values; resolution happens in `main`.

use crate::error::{DeptSqlError, Result};
use crate::synth::SynthesizerProvider;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Synthesizer backend configuration.
    #[serde(default)]
    pub synthesizer: SynthesizerConfig,

    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Web server configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Synthesizer backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizerConfig {
    /// Backend: "ollama" or "mock".
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name for the model server.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the model server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SynthesizerConfig {
    /// Parses the configured provider name.
    pub fn provider(&self) -> Result<SynthesizerProvider> {
        self.provider
            .parse()
            .map_err(|e: String| DeptSqlError::config(e))
    }
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("database.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the web server binds to.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

fn default_bind() -> SocketAddr {
    "127.0.0.1:8080".parse().expect("valid default address")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| DeptSqlError::config(format!("Could not read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DeptSqlError::config(format!("Invalid config file: {e}")))
    }

    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("deptsql").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
