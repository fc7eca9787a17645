//! CLI error types.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An explicitly requested config file does not exist.
    #[error("config not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A `--set` argument is not of the form `NAME=VALUE`.
    #[error("invalid override '{arg}': {reason}")]
    InvalidOverride { arg: String, reason: String },

    /// Configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A capability source could not be read or was malformed.
    #[error(transparent)]
    Capabilities(#[from] capabilities::Error),

    /// The session payload could not be encoded.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
