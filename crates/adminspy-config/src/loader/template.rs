//! Default config documents.

use crate::schema::SessionConfig;
use adminspy_common::ConfigError;

/// Pretty JSON, the layout the plugin host itself writes.
pub(crate) fn default_config_json() -> Result<String, ConfigError> {
    serde_json::to_string_pretty(&SessionConfig::default())
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize default config: {e}")))
}

/// Commented TOML template.
pub(crate) fn default_config_toml() -> String {
    r##"# AdminSpy configuration
# Schema version 1
# Missing fields use defaults.

# Who counts as an admin. Any single match is enough.
#   "@domain/flag"  permission flag
#   "#group"        admin group
#   anything else   command override
admin-permission-flags = ["@css/chat", "#css/admin"]

# Relay opposing team chat to admins.
chat-spy-enabled = true

# Admins hear every team's voice on connect.
voice-spy-enabled = true

ConfigVersion = 1
"##
    .to_string()
}
