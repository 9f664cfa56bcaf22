//! The session-wide config as the relay engine sees it.
//!
//! Read-only between events. A reload swaps the whole value; an outdated
//! `ConfigVersion` only produces an operator warning and the new config is
//! adopted regardless.

use tracing::{info, warn};

use crate::schema::{SessionConfig, CONFIG_SCHEMA_VERSION};

/// A config older than the engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMismatch {
    pub expected: u32,
    pub current: u32,
}

/// Holds the active [`SessionConfig`].
#[derive(Debug, Clone)]
pub struct ConfigPolicy {
    config: SessionConfig,
    expected_version: u32,
}

impl ConfigPolicy {
    /// Adopt the initially loaded config, expecting [`CONFIG_SCHEMA_VERSION`].
    pub fn new(config: SessionConfig) -> Self {
        Self::with_expected_version(config, CONFIG_SCHEMA_VERSION)
    }

    pub fn with_expected_version(config: SessionConfig, expected_version: u32) -> Self {
        check_version(expected_version, config.version);
        Self {
            config,
            expected_version,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn expected_version(&self) -> u32 {
        self.expected_version
    }

    /// Replace the active config. Never rejects; returns the mismatch that
    /// was warned about, if any.
    pub fn on_reload(&mut self, new_config: SessionConfig) -> Option<VersionMismatch> {
        let mismatch = check_version(self.expected_version, new_config.version);
        info!(
            rules = new_config.rules.len(),
            chat_relay = new_config.chat_relay_enabled,
            voice_relay = new_config.voice_relay_enabled,
            version = new_config.version,
            "config adopted"
        );
        self.config = new_config;
        mismatch
    }
}

impl Default for ConfigPolicy {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn check_version(expected: u32, current: u32) -> Option<VersionMismatch> {
    if current >= expected {
        return None;
    }
    warn!(
        expected,
        current,
        "The plugin configuration is outdated. Please consider updating the configuration file. [Expected: {expected} | Current: {current}]"
    );
    Some(VersionMismatch { expected, current })
}
