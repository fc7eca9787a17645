//! Capability dictionaries for remote browser automation sessions.
//!
//! A [`Capabilities`] value declares what a session should look like before
//! it is requested: browser, version, platform and any number of feature
//! flags. Sets coming from different sources are combined with
//! [`Capabilities::merge`], where the argument wins on every collision, so
//! defaults go first and overrides last.
//!
//! # Example
//!
//! ```
//! use capabilities::{Capabilities, Platform, names};
//!
//! let mut caps = Capabilities::firefox();
//! caps.merge(&Capabilities::parse_json(r#"{"version": "102"}"#)?);
//! caps.set_platform(Platform::Windows);
//!
//! assert_eq!(caps.version(), Some("102"));
//! assert!(caps.coerced_bool(names::ACCEPT_INSECURE_CERTS, false));
//! # Ok::<(), capabilities::Error>(())
//! ```

mod error;
pub mod names;
pub mod notice;
mod platform;
mod presets;
mod source;
mod store;
mod value;

pub use error::{Error, Result};
pub use platform::{BrowserType, Platform};
pub use presets::Preset;
pub use store::Capabilities;
pub use value::CapabilityValue;
