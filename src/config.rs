//! Runtime configuration for gpu-request.
//!
//! Specifications can come from a JSON config file, from repeated `--gpus`
//! flags, or both. File specifications come first.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::parser::{parse_device_requests, FormatError};
use crate::request::DeviceRequest;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gpu-request",
    about = "Parse --gpus specifications into container device requests"
)]
pub struct Cli {
    /// GPU devices to add (e.g. "all", "2", "\"device=0,2\"", "driver=nvidia,count=1").
    /// May be repeated.
    #[arg(long = "gpus", value_name = "SPEC")]
    pub gpus: Vec<DeviceRequest>,

    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "gpus.json")]
    pub config: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Specification strings, parsed before any given on the command line.
    pub gpus: Vec<String>,

    /// Output settings.
    pub output: OutputConfig,
}

/// Output formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON.
    pub pretty: bool,
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Parse the configured specifications.
    pub fn device_requests(&self) -> Result<Vec<DeviceRequest>, FormatError> {
        parse_device_requests(&self.gpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert!(cfg.gpus.is_empty());
        assert!(!cfg.output.pretty);
        assert!(cfg.device_requests().unwrap().is_empty());
    }

    #[test]
    fn test_partial_json() {
        let cfg: Config = serde_json::from_str(r#"{"gpus": ["all", "driver=amd,1"]}"#).unwrap();
        assert!(!cfg.output.pretty);
        let reqs = cfg.device_requests().unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[1].driver, "amd");
    }

    #[test]
    fn test_cli_parses_repeated_gpus() {
        let cli = Cli::try_parse_from([
            "gpu-request",
            "--gpus",
            "all",
            "--gpus",
            "\"device=0,2\"",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.gpus.len(), 2);
        assert_eq!(cli.gpus[0].count, -1);
        assert_eq!(cli.gpus[1].device_ids, vec!["0".to_string(), "2".to_string()]);
        assert!(cli.pretty);
    }

    #[test]
    fn test_cli_rejects_bad_spec() {
        assert!(Cli::try_parse_from(["gpu-request", "--gpus", "options=foo"]).is_err());
    }
}
