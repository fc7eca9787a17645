//! Assembling one capability set from every source on the command line.

use std::path::{Path, PathBuf};

use capabilities::{Capabilities, CapabilityValue, Preset, notice};
use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

const CONFIG_FILE: &str = "capctl.toml";

/// Where capabilities come from, lowest precedence first.
#[derive(Args, Debug, Default)]
pub struct Sources {
    /// Config file (defaults to ./capctl.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start from a named preset (see `capctl presets`)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Merge a .json or .toml capabilities file; repeatable
    #[arg(short, long = "file")]
    pub files: Vec<PathBuf>,

    /// Override one capability, as NAME=VALUE; repeatable
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub overrides: Vec<String>,
}

impl Sources {
    /// Merge every source: config preset, `--preset`, config table, files,
    /// then overrides.
    pub fn assemble(&self) -> Result<Capabilities> {
        let config = self.load_config()?;
        let mut layers = Vec::new();

        if let Some(preset) = config.preset()? {
            layers.push(notice::preset_with_notice(preset));
        }
        if let Some(preset) = self.preset {
            layers.push(notice::preset_with_notice(preset));
        }
        layers.push(config.capabilities()?);

        for path in &self.files {
            debug!(path = %path.display(), "merging capabilities file");
            layers.push(Capabilities::load(path)?);
        }

        let overrides = self
            .overrides
            .iter()
            .map(|arg| parse_override(arg))
            .collect::<Result<Vec<_>>>()?;
        layers.push(Capabilities::from_map(overrides)?);

        Ok(Capabilities::merged(&layers))
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) if !path.exists() => Err(Error::ConfigNotFound { path: path.clone() }),
            Some(path) => Ok(Config::load(path)?),
            None if Path::new(CONFIG_FILE).exists() => Ok(Config::load(CONFIG_FILE)?),
            None => Ok(Config::default()),
        }
    }
}

/// Split `NAME=VALUE`. The value is read as a JSON literal when it parses as
/// one (`true`, `300`, `{"args": []}`) and kept as a plain string otherwise.
pub fn parse_override(arg: &str) -> Result<(String, CapabilityValue)> {
    let invalid = |reason: &str| Error::InvalidOverride {
        arg: arg.to_string(),
        reason: reason.to_string(),
    };

    let (name, raw) = arg.split_once('=').ok_or_else(|| invalid("expected NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }

    let value = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => CapabilityValue::try_from(json)?,
        Err(_) => CapabilityValue::String(raw.to_string()),
    };
    Ok((name.to_string(), value))
}
