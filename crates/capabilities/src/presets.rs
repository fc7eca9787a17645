//! Ready-made capability sets for common browsers.
//!
//! Each preset is `with_identity(browser, "", platform)` plus at most one
//! extra flag. Presets never log; see [`crate::notice`] for the wrapper
//! that reports deprecations.

use crate::names::{ACCEPT_INSECURE_CERTS, ENSURING_CLEAN_SESSION};
use crate::{BrowserType, Capabilities, CapabilityValue, Error, Platform, Result};
use std::fmt;
use std::str::FromStr;

impl Capabilities {
    fn preset(browser: BrowserType, platform: Platform) -> Self {
        Self::with_identity(browser.as_str(), "", platform)
    }

    fn preset_with_flag(browser: BrowserType, platform: Platform, flag: &str) -> Self {
        let mut caps = Self::preset(browser, platform);
        caps.insert(flag.to_string(), CapabilityValue::Bool(true));
        caps
    }

    /// Android browser on an Android device.
    pub fn android() -> Self {
        Self::preset(BrowserType::Android, Platform::Android)
    }

    /// Chrome on any platform.
    pub fn chrome() -> Self {
        Self::preset(BrowserType::Chrome, Platform::Any)
    }

    /// Firefox on any platform, accepting insecure certificates.
    pub fn firefox() -> Self {
        Self::preset_with_flag(BrowserType::Firefox, Platform::Any, ACCEPT_INSECURE_CERTS)
    }

    /// HtmlUnit headless browser on any platform.
    pub fn html_unit() -> Self {
        Self::preset(BrowserType::HtmlUnit, Platform::Any)
    }

    /// Microsoft Edge on Windows.
    pub fn edge() -> Self {
        Self::preset(BrowserType::Edge, Platform::Windows)
    }

    /// Internet Explorer on Windows, starting from a clean session.
    pub fn internet_explorer() -> Self {
        Self::preset_with_flag(
            BrowserType::InternetExplorer,
            Platform::Windows,
            ENSURING_CLEAN_SESSION,
        )
    }

    /// Safari on iPhone, reported as a Mac platform.
    pub fn iphone() -> Self {
        Self::preset(BrowserType::IPhone, Platform::Mac)
    }

    /// Safari on iPad, reported as a Mac platform.
    pub fn ipad() -> Self {
        Self::preset(BrowserType::IPad, Platform::Mac)
    }

    /// Presto-based Opera. Prefer [`Capabilities::opera_blink`].
    #[deprecated(note = "use `Capabilities::opera_blink`")]
    pub fn opera() -> Self {
        Self::preset(BrowserType::Opera, Platform::Any)
    }

    /// Blink-based Opera on any platform.
    pub fn opera_blink() -> Self {
        Self::preset(BrowserType::OperaBlink, Platform::Any)
    }

    /// Safari on macOS.
    pub fn safari() -> Self {
        Self::preset(BrowserType::Safari, Platform::Mac)
    }

    /// PhantomJS is no longer developed and support will be dropped.
    #[deprecated(note = "PhantomJS is no longer actively developed")]
    pub fn phantomjs() -> Self {
        Self::preset(BrowserType::PhantomJs, Platform::Any)
    }
}

/// A named preset, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
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

impl Preset {
    /// Every preset, in listing order.
    pub const ALL: [Preset; 12] = [
        Preset::Android,
        Preset::Chrome,
        Preset::Firefox,
        Preset::HtmlUnit,
        Preset::Edge,
        Preset::InternetExplorer,
        Preset::IPhone,
        Preset::IPad,
        Preset::Opera,
        Preset::OperaBlink,
        Preset::Safari,
        Preset::PhantomJs,
    ];

    /// Name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Android => "android",
            Preset::Chrome => "chrome",
            Preset::Firefox => "firefox",
            Preset::HtmlUnit => "html_unit",
            Preset::Edge => "edge",
            Preset::InternetExplorer => "internet_explorer",
            Preset::IPhone => "iphone",
            Preset::IPad => "ipad",
            Preset::Opera => "opera",
            Preset::OperaBlink => "opera_blink",
            Preset::Safari => "safari",
            Preset::PhantomJs => "phantomjs",
        }
    }

    /// Build the preset's capabilities.
    #[allow(deprecated)]
    pub fn build(&self) -> Capabilities {
        match self {
            Preset::Android => Capabilities::android(),
            Preset::Chrome => Capabilities::chrome(),
            Preset::Firefox => Capabilities::firefox(),
            Preset::HtmlUnit => Capabilities::html_unit(),
            Preset::Edge => Capabilities::edge(),
            Preset::InternetExplorer => Capabilities::internet_explorer(),
            Preset::IPhone => Capabilities::iphone(),
            Preset::IPad => Capabilities::ipad(),
            Preset::Opera => Capabilities::opera(),
            Preset::OperaBlink => Capabilities::opera_blink(),
            Preset::Safari => Capabilities::safari(),
            Preset::PhantomJs => Capabilities::phantomjs(),
        }
    }

    /// Whether the preset targets a browser that is no longer supported.
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Preset::Opera | Preset::PhantomJs)
    }

    /// The typed options builder that supersedes this preset, if any.
    pub fn preferred_options(&self) -> Option<&'static str> {
        match self {
            Preset::Chrome => Some("ChromeOptions"),
            Preset::Firefox => Some("FirefoxOptions"),
            Preset::Edge => Some("EdgeOptions"),
            Preset::OperaBlink => Some("OperaOptions"),
            Preset::Safari => Some("SafariOptions"),
            _ => None,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    /// Accepts `opera_blink`, `opera-blink`, `OperaBlink` and so on.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Preset::ALL
            .into_iter()
            .find(|p| normalize(p.name()) == wanted)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown preset: {s}")))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
