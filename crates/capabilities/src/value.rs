//! Capability values.

use crate::{BrowserType, Capabilities, Error, Platform, Result};
use serde::{Deserialize, Serialize};

/// A value stored under a capability name.
///
/// Serialized untagged, so a value renders exactly as the remote end
/// expects it (`true`, `"102"`, `"WINDOWS"`, nested objects).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityValue {
    /// Explicitly set to nothing. Distinct from a name that was never set.
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`, kept exact rather than widened to a float.
    Unsigned(u64),
    Float(f64),
    String(String),
    List(Vec<CapabilityValue>),
    Map(Capabilities),
    #[serde(skip_deserializing)]
    Platform(Platform),
    #[serde(skip_deserializing)]
    Browser(BrowserType),
}

impl CapabilityValue {
    /// Whether this is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean, if this is a native bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String content. Tags are returned by their wire name.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Platform(p) => Some(p.as_str()),
            Self::Browser(b) => Some(b.as_str()),
            _ => None,
        }
    }

    /// The integer, if it fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The nested dictionary, if this is one.
    pub fn as_map(&self) -> Option<&Capabilities> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for CapabilityValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for CapabilityValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u64> for CapabilityValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Unsigned(n), Self::Integer)
    }
}

impl From<i32> for CapabilityValue {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<u16> for CapabilityValue {
    fn from(n: u16) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for CapabilityValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for CapabilityValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for CapabilityValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Platform> for CapabilityValue {
    fn from(p: Platform) -> Self {
        Self::Platform(p)
    }
}

impl From<BrowserType> for CapabilityValue {
    fn from(b: BrowserType) -> Self {
        Self::Browser(b)
    }
}

impl From<Capabilities> for CapabilityValue {
    fn from(m: Capabilities) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<CapabilityValue>> From<Vec<T>> for CapabilityValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CapabilityValue>> From<Option<T>> for CapabilityValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for CapabilityValue {
    type Error = Error;

    /// Fails only when a nested object carries an empty name.
    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        Ok(match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(u)) => Self::Unsigned(u),
                (None, None) => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(map) => Self::Map(Capabilities::from_raw(Some(map))?),
        })
    }
}

impl TryFrom<toml::Value> for CapabilityValue {
    type Error = Error;

    /// TOML has no null; datetimes are kept as their string form.
    fn try_from(value: toml::Value) -> Result<Self> {
        use toml::Value;

        Ok(match value {
            Value::Boolean(b) => Self::Bool(b),
            Value::Integer(n) => Self::Integer(n),
            Value::Float(n) => Self::Float(n),
            Value::String(s) => Self::String(s),
            Value::Datetime(dt) => Self::String(dt.to_string()),
            Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Table(table) => Self::Map(Capabilities::from_toml_table(table)?),
        })
    }
}
