use serde::Deserialize;
use thiserror::Error;

use crate::resample::ResampleMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid duration: {0}")]
    Duration(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resample: ResampleMode,
    #[serde(default)]
    pub crop: CropConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CropConfig {
    /// Window length such as "5m" or "1h 30m". Unset means the rest of the
    /// track.
    #[serde(default)]
    pub duration: Option<String>,
}

impl CropConfig {
    pub fn duration_minutes(&self) -> Result<Option<f64>, ConfigError> {
        self.duration
            .as_deref()
            .map(parse_duration_minutes)
            .transpose()
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

/// "90s", "5m", "1h 15m" to fractional minutes.
pub fn parse_duration_minutes(s: &str) -> Result<f64, ConfigError> {
    humantime::parse_duration(s.trim())
        .map(|d| d.as_secs_f64() / 60.0)
        .map_err(|e| ConfigError::Duration(format!("{}: {}", s, e)))
}
