//! Well-known capability names.
//!
//! The store treats these like any other name; they exist so callers and
//! the named accessors agree on spelling.

pub const BROWSER_NAME: &str = "browserName";
pub const VERSION: &str = "version";
pub const PLATFORM: &str = "platform";
pub const SUPPORTS_JAVASCRIPT: &str = "javascriptEnabled";
pub const ACCEPT_INSECURE_CERTS: &str = "acceptInsecureCerts";

/// Asks the remote end to start from a clean profile (Internet Explorer).
pub const ENSURING_CLEAN_SESSION: &str = "ensureCleanSession";
