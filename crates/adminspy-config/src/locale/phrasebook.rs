//! Keyed phrase templates with built-in English defaults.

use std::collections::HashMap;
use std::path::Path;

use adminspy_common::ConfigError;
use tracing::{debug, info};

use super::colors::{ChatColor, TOKEN_RE};
use super::keys;

const ENGLISH: &[(&str, &str)] = &[
    (keys::TAG, "{Red}[AdminSpy]"),
    (keys::TEAM_TERRORIST, "{Gold}(T)"),
    (keys::TEAM_COUNTER_TERRORIST, "{Blue}(CT)"),
    (keys::TEAM_SPECTATOR, "{Grey}(SPEC)"),
    (keys::PLAYER_DEAD, " {Red}*DEAD*"),
    (keys::MESSAGE_FORMATTED, "{0} {1} {2}{3}"),
    (
        keys::VOICE_LISTEN_ALL,
        "{Default}Your voice settings have been set to {Green}listen all",
    ),
    (
        keys::VOICE_TEAM_ONLY,
        "{Default}Your voice settings have been set to {Green}default",
    ),
];

/// Phrase templates keyed by symbolic id.
#[derive(Debug, Clone)]
pub struct Phrasebook {
    phrases: HashMap<String, String>,
}

impl Phrasebook {
    /// Built-in English phrases overlaid with `overrides`.
    pub fn from_map(overrides: HashMap<String, String>) -> Self {
        let mut book = Self::default();
        book.phrases.extend(overrides);
        book
    }

    /// Load a JSON language file (`{"key": "template", ...}`). Keys it
    /// doesn't define keep their English default.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read language file {}: {e}", path.display()))
        })?;

        let overrides: HashMap<String, String> = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to parse language file {}: {e}",
                path.display()
            ))
        })?;

        info!(phrases = overrides.len(), "loaded language file {}", path.display());
        Ok(Self::from_map(overrides))
    }

    pub fn template(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    /// Render `key` with positional `args`. An unknown key renders as the
    /// key itself; placeholders without an argument and unknown color
    /// tokens are left verbatim.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.template(key) else {
            debug!(key, "missing phrase");
            return key.to_string();
        };
        expand(template, args)
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self {
            phrases: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

fn expand(template: &str, args: &[&str]) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let token = &caps[1];
            if let Ok(index) = token.parse::<usize>() {
                return match args.get(index) {
                    Some(arg) => arg.to_string(),
                    None => caps[0].to_string(),
                };
            }
            match ChatColor::from_token(token) {
                Some(color) => color.code().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
