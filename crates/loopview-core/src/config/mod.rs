//! # Configuration System
//!
//! Hierarchical TOML configuration for loopview.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.loopview/config.toml` (global user preferences)
//! 3. **Project config** - `./.loopview/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ./.loopview/config.toml
//! [preview]
//! intercept_clicks = true
//! open_panel = false
//! current_url = "http://localhost:3000"
//!
//! [scan]
//! strip_ansi = true
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use loopview_core::config::LoopviewConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LoopviewConfig::load_hierarchy()?;
//!     let intercept = config.preview.intercept_clicks();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{LoopviewConfig, PreviewConfig, ScanConfig};
pub use validation::validate_config;

use crate::errors::ConfigError;

impl LoopviewConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
