//! Default values for configuration fields.

use crate::config::types::{PreviewConfig, ScanConfig};

impl PreviewConfig {
    /// Returns whether clicks are intercepted, defaulting to true.
    pub fn intercept_clicks(&self) -> bool {
        self.intercept_clicks.unwrap_or(true)
    }

    /// Returns whether the panel opens on every recognized click, defaulting to true.
    pub fn open_panel(&self) -> bool {
        self.open_panel.unwrap_or(true)
    }
}

impl ScanConfig {
    /// Returns whether escape sequences are stripped, defaulting to true.
    pub fn strip_ansi(&self) -> bool {
        self.strip_ansi.unwrap_or(true)
    }
}
