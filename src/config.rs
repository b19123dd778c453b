//! Runtime settings, assembled from the command line. Nothing is read from
//! or written to disk.

use crate::cli::{Cli, OutputFormat};
use anyhow::{Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PROMPT: &str = "Enter time: ";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub prompt: String,
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let defaults = Config::default();
        let log_level = match &cli.log_level {
            Some(level) => {
                LevelFilter::from_str(level)
                    .map_err(|_| anyhow!("Invalid log level '{}'", level))?;
                level.to_lowercase()
            }
            None => defaults.log_level,
        };

        Ok(Self {
            prompt: cli.prompt.clone().unwrap_or(defaults.prompt),
            log_level,
            format: cli.format,
        })
    }
}
