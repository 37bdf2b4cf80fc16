//! Configuration type definitions.
//!
//! Every field is optional in the file so a project config only overrides
//! what it actually sets. Accessors in [`super::defaults`] apply defaults.

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoopviewConfig {
    /// Preview watcher behavior
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Output scanning behavior
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Preview watcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PreviewConfig {
    /// Whether clicked candidates are intercepted at all.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercept_clicks: Option<bool>,

    /// Whether the preview panel is revealed on every recognized click.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_panel: Option<bool>,

    /// URL the preview surface is already showing. Must be a local address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_url: Option<String>,
}

/// Output scanning configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScanConfig {
    /// Remove terminal escape sequences before looking for URLs.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_ansi: Option<bool>,
}
