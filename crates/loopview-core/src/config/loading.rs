//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.loopview/config.toml` (global user preferences)
//! 3. **Project config** - `./.loopview/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::config::types::{LoopviewConfig, PreviewConfig, ScanConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Directory name holding `config.toml`, under `$HOME` and the project root.
pub const CONFIG_DIR_NAME: &str = ".loopview";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.loopview/config.toml`)
/// 3. Project config (`./.loopview/config.toml`)
///
/// # Errors
///
/// Returns an error if a config file cannot be read or parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<LoopviewConfig, ConfigError> {
    let user_dir = dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME));
    let project_dir = std::env::current_dir()?.join(CONFIG_DIR_NAME);
    load_from_dirs(user_dir.as_deref(), &project_dir)
}

/// Load and merge `config.toml` from an optional user directory and a
/// project directory, then validate the result.
pub fn load_from_dirs(
    user_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<LoopviewConfig, ConfigError> {
    let mut config = LoopviewConfig::default();
    let mut sources = 0;

    if let Some(user_dir) = user_dir
        && let Some(user_config) = load_config_file(&user_dir.join(CONFIG_FILE_NAME))?
    {
        config = merge_configs(config, user_config);
        sources += 1;
    }

    if let Some(project_config) = load_config_file(&project_dir.join(CONFIG_FILE_NAME))? {
        config = merge_configs(config, project_config);
        sources += 1;
    }

    validate_config(&config)?;

    info!(event = "core.config.load_completed", sources = sources);

    Ok(config)
}

/// Load a single configuration file. A missing file yields `Ok(None)`.
pub fn load_config_file(path: &Path) -> Result<Option<LoopviewConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(event = "core.config.file_missing", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence for
/// every field it sets.
pub fn merge_configs(base: LoopviewConfig, override_config: LoopviewConfig) -> LoopviewConfig {
    LoopviewConfig {
        preview: PreviewConfig {
            intercept_clicks: override_config
                .preview
                .intercept_clicks
                .or(base.preview.intercept_clicks),
            open_panel: override_config.preview.open_panel.or(base.preview.open_panel),
            current_url: override_config
                .preview
                .current_url
                .or(base.preview.current_url),
        },
        scan: ScanConfig {
            strip_ansi: override_config.scan.strip_ansi.or(base.scan.strip_ansi),
        },
    }
}
