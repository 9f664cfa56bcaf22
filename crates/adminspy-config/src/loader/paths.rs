//! Default config file creation.

use adminspy_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::template::{default_config_json, default_config_toml};
use super::ConfigFormat;

/// Write a default config file in the format implied by the extension.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => default_config_json()?,
        ConfigFormat::Toml => default_config_toml(),
    };

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
