//! Configuration validation.

use crate::config::types::LoopviewConfig;
use crate::errors::ConfigError;
use crate::preview::is_localhost_url;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when `preview.current_url`
/// is set to something that is not a local preview address.
pub fn validate_config(config: &LoopviewConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.preview.current_url
        && !is_localhost_url(url)
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "preview.current_url '{}' is not a local address (expected localhost, 127.x.x.x, 0.0.0.0 or [::1])",
                url
            ),
        });
    }

    Ok(())
}
