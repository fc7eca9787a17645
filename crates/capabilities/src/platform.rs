//! Platform and browser tags carried as capability values.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system a session should run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    /// No preference; the remote end picks.
    Any,
    Windows,
    Mac,
    Linux,
    Unix,
    Android,
    Ios,
}

impl Platform {
    /// Every platform tag.
    pub const ALL: [Platform; 7] = [
        Platform::Any,
        Platform::Windows,
        Platform::Mac,
        Platform::Linux,
        Platform::Unix,
        Platform::Android,
        Platform::Ios,
    ];

    /// Wire name, e.g. `WINDOWS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Any => "ANY",
            Platform::Windows => "WINDOWS",
            Platform::Mac => "MAC",
            Platform::Linux => "LINUX",
            Platform::Unix => "UNIX",
            Platform::Android => "ANDROID",
            Platform::Ios => "IOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown platform: {s}")))
    }
}

/// Browser identity requested for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserType {
    Android,
    Chrome,
    Firefox,
    HtmlUnit,
    Edge,
    InternetExplorer,
    IPhone,
    IPad,
    Opera,
    OperaBlink,
    Safari,
    PhantomJs,
}

impl BrowserType {
    /// Every browser tag.
    pub const ALL: [BrowserType; 12] = [
        BrowserType::Android,
        BrowserType::Chrome,
        BrowserType::Firefox,
        BrowserType::HtmlUnit,
        BrowserType::Edge,
        BrowserType::InternetExplorer,
        BrowserType::IPhone,
        BrowserType::IPad,
        BrowserType::Opera,
        BrowserType::OperaBlink,
        BrowserType::Safari,
        BrowserType::PhantomJs,
    ];

    /// Legacy wire name, as remote ends expect it in `browserName`.
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserType::Android => "android",
            BrowserType::Chrome => "chrome",
            BrowserType::Firefox => "firefox",
            BrowserType::HtmlUnit => "htmlunit",
            BrowserType::Edge => "MicrosoftEdge",
            BrowserType::InternetExplorer => "internet explorer",
            BrowserType::IPhone => "iPhone",
            BrowserType::IPad => "iPad",
            BrowserType::Opera => "opera",
            BrowserType::OperaBlink => "operablink",
            BrowserType::Safari => "safari",
            BrowserType::PhantomJs => "phantomjs",
        }
    }
}

impl fmt::Display for BrowserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BrowserType::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown browser: {s}")))
    }
}

impl Serialize for BrowserType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BrowserType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
