//! Command-line argument parsing.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Natural-language to SQL demo with a guarded single-table executor.
#[derive(Parser, Debug)]
#[command(name = "deptsql")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Database file path (overrides config)
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Address for the web server (overrides config)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Answer one question on stdout and exit (no web server)
    #[arg(long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Use the deterministic mock synthesizer (no model server required)
    #[arg(long)]
    pub mock_model: bool,
}

impl Cli {
    /// Parses CLI arguments from the environment.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, defaulting to the platform location.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
