//! The capability dictionary.

use crate::names::{
    ACCEPT_INSECURE_CERTS, BROWSER_NAME, PLATFORM, SUPPORTS_JAVASCRIPT, VERSION,
};
use crate::{CapabilityValue, Error, Platform, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered set of named capabilities.
///
/// Names are unique and non-empty. Overwriting a name keeps its original
/// position; only the value changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capabilities {
    entries: IndexMap<String, CapabilityValue>,
}

impl Capabilities {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary holding browser name, version and platform.
    pub fn with_identity(
        browser: impl Into<String>,
        version: impl Into<String>,
        platform: Platform,
    ) -> Self {
        let mut caps = Self::new();
        caps.set_browser_name(browser);
        caps.set_version(version);
        caps.set_platform(platform);
        caps
    }

    /// Copy every `(name, value)` pair, in input order.
    pub fn from_map<I, K, V>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CapabilityValue>,
    {
        let mut caps = Self::new();
        for (name, value) in raw {
            caps.set(name, value)?;
        }
        Ok(caps)
    }

    /// Copy a loosely typed JSON map. A missing map yields an empty dictionary.
    pub fn from_raw(raw: Option<serde_json::Map<String, serde_json::Value>>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::new());
        };

        let mut caps = Self::new();
        for (name, value) in raw {
            caps.set(name, CapabilityValue::try_from(value)?)?;
        }
        Ok(caps)
    }

    /// Copy a JSON value that should be a map. `null` yields an empty
    /// dictionary; any other non-object is rejected.
    pub fn from_json(raw: serde_json::Value) -> Result<Self> {
        match raw {
            serde_json::Value::Null => Ok(Self::new()),
            serde_json::Value::Object(map) => Self::from_raw(Some(map)),
            other => Err(Error::InvalidArgument(format!(
                "capabilities must be a map, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Copy a TOML table.
    pub fn from_toml_table(table: toml::Table) -> Result<Self> {
        let mut caps = Self::new();
        for (name, value) in table {
            caps.set(name, CapabilityValue::try_from(value)?)?;
        }
        Ok(caps)
    }

    /// Start empty and merge each dictionary in turn; later ones win.
    pub fn merged<'a>(others: impl IntoIterator<Item = &'a Capabilities>) -> Self {
        let mut caps = Self::new();
        for other in others {
            caps.merge(other);
        }
        caps
    }

    /// Look up a capability. `None` means the name was never set.
    pub fn get(&self, name: &str) -> Option<&CapabilityValue> {
        self.entries.get(name)
    }

    /// Whether `name` has been set, even to null.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert or overwrite a capability.
    ///
    /// Returns [`Error::InvalidArgument`] for an empty name.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<CapabilityValue>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "capability name must not be empty".to_string(),
            ));
        }
        self.insert(name, value.into());
        Ok(self)
    }

    /// Copy every entry of `other` into `self`; `other` wins on collisions.
    pub fn merge(&mut self, other: &Capabilities) -> &mut Self {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
        self
    }

    /// Read a flag that may be stored as a bool or as a string.
    ///
    /// Strings are `true` only when they equal `"true"` ignoring case; any
    /// other string, `"yes"` and `"1"` included, reads as `false`. A missing
    /// entry or a value of another type yields `default`.
    pub fn coerced_bool(&self, name: &str, default: bool) -> bool {
        match self.get(name) {
            Some(CapabilityValue::Bool(b)) => *b,
            Some(CapabilityValue::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => default,
        }
    }

    /// Number of capabilities set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no capability has been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CapabilityValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Capability names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn insert(&mut self, name: String, value: CapabilityValue) {
        self.entries.insert(name, value);
    }

    // --- named accessors ---

    /// Set `browserName`.
    pub fn set_browser_name(&mut self, browser: impl Into<String>) -> &mut Self {
        self.insert(BROWSER_NAME.to_string(), CapabilityValue::String(browser.into()));
        self
    }

    /// Set `version`.
    pub fn set_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.insert(VERSION.to_string(), CapabilityValue::String(version.into()));
        self
    }

    /// Set `platform` to a platform tag.
    pub fn set_platform(&mut self, platform: Platform) -> &mut Self {
        self.insert(PLATFORM.to_string(), platform.into());
        self
    }

    /// Set `javascriptEnabled`.
    pub fn set_javascript_enabled(&mut self, enabled: bool) -> &mut Self {
        self.insert(SUPPORTS_JAVASCRIPT.to_string(), enabled.into());
        self
    }

    /// Set `acceptInsecureCerts`.
    pub fn set_accept_insecure_certs(&mut self, accept: bool) -> &mut Self {
        self.insert(ACCEPT_INSECURE_CERTS.to_string(), accept.into());
        self
    }

    /// The requested browser, if set to a string or browser tag.
    pub fn browser_name(&self) -> Option<&str> {
        self.get(BROWSER_NAME).and_then(CapabilityValue::as_str)
    }

    /// The requested browser version, if set to a string.
    pub fn version(&self) -> Option<&str> {
        self.get(VERSION).and_then(CapabilityValue::as_str)
    }

    /// The requested platform, whether stored as a tag or as its name.
    pub fn platform(&self) -> Option<Platform> {
        match self.get(PLATFORM)? {
            CapabilityValue::Platform(p) => Some(*p),
            CapabilityValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Whether JavaScript is requested. Unset means no.
    pub fn is_javascript_enabled(&self) -> bool {
        self.coerced_bool(SUPPORTS_JAVASCRIPT, false)
    }

    /// Whether insecure certificates are accepted. Unset means yes.
    pub fn accept_insecure_certs(&self) -> bool {
        self.coerced_bool(ACCEPT_INSECURE_CERTS, true)
    }
}

impl<'a> IntoIterator for &'a Capabilities {
    type Item = (&'a String, &'a CapabilityValue);
    type IntoIter = indexmap::map::Iter<'a, String, CapabilityValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Capabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Capabilities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = IndexMap::<String, CapabilityValue>::deserialize(deserializer)?;
        Self::from_map(entries).map_err(serde::de::Error::custom)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(pairs: &[(&str, CapabilityValue)]) -> Capabilities {
        Capabilities::from_map(pairs.iter().cloned()).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let caps = Capabilities::new();
        assert!(caps.is_empty());
        assert_eq!(caps.get(BROWSER_NAME), None);
    }

    #[test]
    fn test_with_identity_sets_three_entries_in_order() {
        let caps = Capabilities::with_identity("firefox", "", Platform::Any);
        assert_eq!(caps.len(), 3);
        assert_eq!(
            caps.names().collect::<Vec<_>>(),
            vec![BROWSER_NAME, VERSION, PLATFORM]
        );
        assert_eq!(caps.version(), Some(""));
        assert_eq!(caps.platform(), Some(Platform::Any));
    }

    #[test]
    fn test_null_is_distinct_from_unset() {
        let mut caps = Capabilities::new();
        caps.set("proxy", CapabilityValue::Null).unwrap();
        assert_eq!(caps.get("proxy"), Some(&CapabilityValue::Null));
        assert_eq!(caps.get("timeouts"), None);
        assert!(caps.contains("proxy"));
    }

    #[test]
    fn test_set_overwrite_keeps_position() {
        let mut caps = dict(&[("a", 1.into()), ("b", 2.into()), ("c", 3.into())]);
        caps.set("a", 10).unwrap();
        assert_eq!(caps.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(caps.get("a"), Some(&CapabilityValue::Integer(10)));
        assert_eq!(caps.len(), 3);
    }

    #[test]
    fn test_set_rejects_empty_name() {
        let mut caps = Capabilities::new();
        let err = caps.set("", true).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(caps.is_empty());
    }

    #[test]
    fn test_merge_right_bias() {
        let mut a = dict(&[("version", "1".into()), ("only_a", true.into())]);
        let b = dict(&[("version", "2".into()), ("only_b", false.into())]);
        a.merge(&b);
        assert_eq!(a.get("version"), b.get("version"));
    }

    #[test]
    fn test_merge_union_keeps_unique_entries() {
        let mut a = dict(&[("version", "1".into()), ("only_a", true.into())]);
        let b = dict(&[("version", "2".into()), ("only_b", false.into())]);
        a.merge(&b);
        assert_eq!(a.get("only_a"), Some(&CapabilityValue::Bool(true)));
        assert_eq!(a.get("only_b"), Some(&CapabilityValue::Bool(false)));
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_merge_empty_is_noop() {
        let mut a = dict(&[("x", 1.into())]);
        let before = a.clone();
        a.merge(&Capabilities::new());
        assert_eq!(a, before);
    }

    #[test]
    fn test_merge_is_not_commutative() {
        let a = dict(&[("k", "a".into())]);
        let b = dict(&[("k", "b".into())]);
        let ab = a.clone().merge(&b).clone();
        let ba = b.clone().merge(&a).clone();
        assert_ne!(ab.get("k"), ba.get("k"));
    }

    #[test]
    fn test_merged_applies_in_argument_order_last_wins() {
        let a = dict(&[("k", "a".into()), ("x", 1.into())]);
        let b = dict(&[("k", "b".into())]);
        let c = dict(&[("k", "c".into()), ("y", 2.into())]);

        let merged = Capabilities::merged([&a, &b, &c]);
        assert_eq!(merged.get("k"), Some(&CapabilityValue::from("c")));
        assert_eq!(merged.get("x"), Some(&CapabilityValue::Integer(1)));
        assert_eq!(merged.get("y"), Some(&CapabilityValue::Integer(2)));

        let mut chained = a.clone();
        chained.merge(&b).merge(&c);
        assert_eq!(chained, merged);
    }

    #[test]
    fn test_from_raw_none_is_empty() {
        let caps = Capabilities::from_raw(None).unwrap();
        assert!(caps.is_empty());
        let caps = Capabilities::from_json(serde_json::Value::Null).unwrap();
        assert!(caps.is_empty());
    }

    #[test]
    fn test_from_raw_keeps_input_order() {
        let mut raw = serde_json::Map::new();
        raw.insert("version".to_string(), json!("102"));
        raw.insert("browserName".to_string(), json!("firefox"));
        raw.insert("acceptInsecureCerts".to_string(), json!(true));

        let caps = Capabilities::from_raw(Some(raw)).unwrap();
        assert_eq!(
            caps.names().collect::<Vec<_>>(),
            vec!["version", "browserName", "acceptInsecureCerts"]
        );
        let json = serde_json::to_string(&caps).unwrap();
        assert_eq!(json, r#"{"version":"102","browserName":"firefox","acceptInsecureCerts":true}"#);
    }

    #[test]
    fn test_from_json_rejects_non_map() {
        let err = Capabilities::from_json(json!(["browserName"])).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_from_map_round_trip() {
        let raw = vec![
            ("browserName".to_string(), CapabilityValue::from("chrome")),
            ("acceptInsecureCerts".to_string(), CapabilityValue::from("false")),
            ("pageLoadTimeout".to_string(), CapabilityValue::from(300)),
            ("proxy".to_string(), CapabilityValue::Null),
        ];
        let caps = Capabilities::from_map(raw.clone()).unwrap();
        let copied: Vec<_> = caps
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        assert_eq!(copied, raw);
    }

    #[test]
    fn test_coerced_bool_table() {
        let caps = dict(&[
            ("native", true.into()),
            ("lower", "true".into()),
            ("mixed", "True".into()),
            ("yes", "yes".into()),
            ("number", 1.into()),
        ]);
        assert!(caps.coerced_bool("native", false));
        assert!(caps.coerced_bool("lower", false));
        assert!(caps.coerced_bool("mixed", false));
        assert!(caps.coerced_bool("absent", true));
        assert!(!caps.coerced_bool("absent", false));
        assert!(caps.coerced_bool("number", true));
        assert!(!caps.coerced_bool("number", false));
    }

    // Lenient parsing is kept on purpose: anything but "true" is false, with
    // no error, even when the caller's default is true.
    #[test]
    fn test_coerced_bool_malformed_string_reads_false() {
        let caps = dict(&[("yes", "yes".into()), ("one", "1".into()), ("blank", "".into())]);
        assert!(!caps.coerced_bool("yes", true));
        assert!(!caps.coerced_bool("one", true));
        assert!(!caps.coerced_bool("blank", true));
    }

    #[test]
    fn test_accept_insecure_certs_defaults_to_true() {
        let mut caps = Capabilities::new();
        assert!(caps.accept_insecure_certs());
        caps.set(ACCEPT_INSECURE_CERTS, "FALSE").unwrap();
        assert!(!caps.accept_insecure_certs());
        caps.set_accept_insecure_certs(true);
        assert!(caps.accept_insecure_certs());
    }

    #[test]
    fn test_javascript_enabled_defaults_to_false() {
        let mut caps = Capabilities::new();
        assert!(!caps.is_javascript_enabled());
        caps.set_javascript_enabled(true);
        assert!(caps.is_javascript_enabled());
    }

    #[test]
    fn test_platform_from_string() {
        let caps = dict(&[(PLATFORM, "windows".into())]);
        assert_eq!(caps.platform(), Some(Platform::Windows));
        let caps = dict(&[(PLATFORM, "plan9".into())]);
        assert_eq!(caps.platform(), None);
    }

    #[test]
    fn test_defaults_then_overrides() {
        let mut caps = Capabilities::with_identity("firefox", "", Platform::Any);
        caps.set(ACCEPT_INSECURE_CERTS, true).unwrap();
        let overrides = caps_of_version("102");

        caps.merge(&overrides);

        assert_eq!(caps.browser_name(), Some("firefox"));
        assert_eq!(caps.version(), Some("102"));
        assert_eq!(caps.get(ACCEPT_INSECURE_CERTS), Some(&CapabilityValue::Bool(true)));
        assert_eq!(caps.get(PLATFORM), Some(&CapabilityValue::Platform(Platform::Any)));
    }

    fn caps_of_version(version: &str) -> Capabilities {
        let mut caps = Capabilities::new();
        caps.set(VERSION, version).unwrap();
        caps
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut caps = Capabilities::with_identity("chrome", "", Platform::Linux);
        caps.set("goog:chromeOptions", caps_of_version("x")).unwrap();
        let json = serde_json::to_string(&caps).unwrap();
        assert_eq!(
            json,
            r#"{"browserName":"chrome","version":"","platform":"LINUX","goog:chromeOptions":{"version":"x"}}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let result: std::result::Result<Capabilities, _> = serde_json::from_str(r#"{"":1}"#);
        assert!(result.is_err());
        let caps: Capabilities =
            serde_json::from_str(r#"{"b":1,"a":{"nested":true}}"#).unwrap();
        assert_eq!(caps.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
