//! Caller-facing preset construction with deprecation notices.

use crate::{Capabilities, Preset};
use std::fmt;
use tracing::{info, warn};

/// Something a caller should hear about when picking a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A typed options builder supersedes the preset. Logged at `info`.
    Preferred { preset: Preset, options: &'static str },
    /// The preset is deprecated. Logged at `warn`.
    Deprecated { preset: Preset, reason: &'static str },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Preferred { preset, options } => {
                write!(f, "Using `new {options}()` is preferred to the `{preset}` preset")
            }
            Notice::Deprecated { preset, reason } => {
                write!(f, "`{preset}` preset is deprecated; {reason}")
            }
        }
    }
}

/// Notices for a preset, without logging them.
pub fn notices(preset: Preset) -> Vec<Notice> {
    let mut notices = Vec::new();
    if let Some(options) = preset.preferred_options() {
        notices.push(Notice::Preferred { preset, options });
    }
    if preset.is_deprecated() {
        let reason = match preset {
            Preset::Opera => "use `opera_blink`",
            Preset::PhantomJs => "PhantomJS is no longer actively developed",
            _ => "support will be dropped",
        };
        notices.push(Notice::Deprecated { preset, reason });
    }
    notices
}

/// Build a preset and report, through `tracing`, when a better way exists.
pub fn preset_with_notice(preset: Preset) -> Capabilities {
    for notice in notices(preset) {
        match notice {
            Notice::Preferred { .. } => info!("{notice}"),
            Notice::Deprecated { .. } => warn!(preset = %preset, "{notice}"),
        }
    }
    preset.build()
}
