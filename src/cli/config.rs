//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::output::OutputFormat;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format
    pub format: Option<OutputFormat>,

    /// Start from an empty board instead of the sample data
    pub empty: Option<bool>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing default config file yields the default config; a missing
    /// explicitly requested file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/noteboard/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("noteboard")
            .join("config.toml")
    }

    /// Resolve the output format, with the CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--format` argument
    /// 2. Config file `format` setting
    /// 3. Human
    pub fn format(&self, cli_format: Option<OutputFormat>) -> OutputFormat {
        cli_format.or(self.format).unwrap_or_default()
    }

    /// Resolve whether to start without sample data.
    ///
    /// The `--empty` flag can only switch this on.
    pub fn empty(&self, cli_empty: bool) -> bool {
        cli_empty || self.empty.unwrap_or(false)
    }
}
