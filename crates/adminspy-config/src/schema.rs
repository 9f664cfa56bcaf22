//! Session configuration schema.
//!
//! Field names on disk match what the plugin host writes, so the struct
//! uses explicit renames. `serde(default)` lets partial files load.

use serde::{Deserialize, Serialize};

use crate::rules::AuthorizationRule;

/// Config version this engine expects.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Everything the relay engine reads during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// A participant is privileged if any of these matches.
    #[serde(rename = "admin-permission-flags")]
    pub rules: Vec<AuthorizationRule>,
    #[serde(rename = "chat-spy-enabled")]
    pub chat_relay_enabled: bool,
    #[serde(rename = "voice-spy-enabled")]
    pub voice_relay_enabled: bool,
    #[serde(rename = "ConfigVersion")]
    pub version: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                AuthorizationRule::PermissionFlag("@css/chat".into()),
                AuthorizationRule::GroupMembership("#css/admin".into()),
            ],
            chat_relay_enabled: true,
            voice_relay_enabled: true,
            version: CONFIG_SCHEMA_VERSION,
        }
    }
}
