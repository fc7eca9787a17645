//! Configuration loading from capctl.toml.

use capabilities::{Capabilities, Preset};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Preset applied before anything else.
    pub preset: Option<String>,

    /// Base capabilities, applied over the preset.
    #[serde(default)]
    pub capabilities: toml::Table,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The configured preset, if any.
    pub fn preset(&self) -> Result<Option<Preset>, ConfigError> {
        self.preset
            .as_deref()
            .map(str::parse::<Preset>)
            .transpose()
            .map_err(ConfigError::Invalid)
    }

    /// The `[capabilities]` table as a capability set.
    pub fn capabilities(&self) -> Result<Capabilities, ConfigError> {
        Ok(Capabilities::from_toml_table(self.capabilities.clone())?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(#[from] capabilities::Error),
}
