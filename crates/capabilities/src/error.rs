//! Capability error types.

use thiserror::Error;

/// Capability errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller broke the input contract (empty capability name, raw input
    /// that is not a string-keyed map, unknown platform name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to parse a capabilities file.
    #[error("failed to parse capabilities: {0}")]
    Parse(String),

    /// An I/O error occurred while reading capabilities.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
