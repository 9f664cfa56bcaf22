//! Config validation.
//!
//! Problems are collected into a single `ConfigError` rather than failing
//! on the first one. An older `ConfigVersion` is not a validation problem;
//! [`crate::ConfigPolicy`] flags that on adoption.

mod rules;


use crate::schema::{SessionConfig, CONFIG_SCHEMA_VERSION};
use adminspy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SessionConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    rules::validate_rules(&mut errors, &config.rules);
    validate_version(&mut errors, config.version);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_version(errors: &mut Vec<String>, version: u32) {
    if version > CONFIG_SCHEMA_VERSION {
        errors.push(format!(
            "ConfigVersion = {version} is newer than supported version {CONFIG_SCHEMA_VERSION}"
        ));
    }
}
