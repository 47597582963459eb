use crate::logger::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Logger configuration, usually read from a JSON file such as
///
/// ```json
/// { "level": "trace" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Severity,
}

impl LoggerConfig {
    pub fn try_new(config_file: &Path) -> Result<LoggerConfig, ConfigError> {
        let config_string = fs::read_to_string(config_file)?;
        let config = LoggerConfig::from_json(&config_string)?;
        log::debug!(
            "Loaded logger config from '{}', level: {}",
            config_file.to_string_lossy(),
            config.level
        );
        Ok(config)
    }

    pub fn from_json(config_string: &str) -> Result<LoggerConfig, ConfigError> {
        serde_json::from_str(config_string).map_err(|err| ConfigError::Parse(err.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}
