//! Loading capability sets from files.

use crate::{Capabilities, Error, Result};
use std::path::Path;

impl Capabilities {
    /// Load capabilities from a `.json` or `.toml` file.
    ///
    /// Files without a `.json` extension are read as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_toml(&content)
        }
    }

    /// Parse capabilities from a JSON document. `null` is an empty set.
    pub fn parse_json(json: &str) -> Result<Self> {
        let raw: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
        Self::from_json(raw)
    }

    /// Parse capabilities from a TOML document.
    pub fn parse_toml(toml: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))?;
        Self::from_toml_table(table)
    }
}
