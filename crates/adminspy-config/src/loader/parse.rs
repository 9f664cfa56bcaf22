//! Core config loading: parse from a string or a file path.

use crate::schema::SessionConfig;
use crate::validation;
use adminspy_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::create_default_config;
use super::ConfigFormat;

/// Parse a raw config document.
///
/// Rule strings are classified here, once. After parsing, the config is
/// validated; validation problems are logged as a warning and the parsed
/// config is returned as-is.
pub fn load_from_str(raw: &str, format: ConfigFormat) -> Result<SessionConfig, ConfigError> {
    let config: SessionConfig = match format {
        ConfigFormat::Json => serde_json::from_str(raw)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse JSON: {e}")))?,
        ConfigFormat::Toml => toml::from_str(raw)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?,
    };

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e} (using parsed config anyway)");
    }

    Ok(config)
}

/// Load config from a specific file path. The format follows the extension.
pub fn load_from_path(path: &Path) -> Result<SessionConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content, ConfigFormat::from_path(path))?;
    info!(
        rules = config.rules.len(),
        version = config.version,
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Load config from `path`, writing a default file first if none exists.
pub fn load_or_create(path: &Path) -> Result<SessionConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(SessionConfig::default())
        }
        Err(e) => Err(e),
    }
}
