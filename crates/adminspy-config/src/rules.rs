//! Authorization rules.
//!
//! A rule string is classified once, when the config is deserialized:
//! a leading `@` is a permission flag, `#` a group, anything else a command
//! override. The full string, prefix included, is what the host's admin
//! subsystem is keyed by, so it is kept verbatim.

use std::fmt;
use std::str::FromStr;

use adminspy_common::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AuthorizationRule {
    /// `@domain/flag`
    PermissionFlag(String),
    /// `#domain/group`
    GroupMembership(String),
    /// Name of a command whose override grants access.
    CommandOverride(String),
}

impl AuthorizationRule {
    /// The identifier handed to the host, prefix included.
    pub fn as_str(&self) -> &str {
        match self {
            AuthorizationRule::PermissionFlag(s)
            | AuthorizationRule::GroupMembership(s)
            | AuthorizationRule::CommandOverride(s) => s,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AuthorizationRule::PermissionFlag(_) => "permission",
            AuthorizationRule::GroupMembership(_) => "group",
            AuthorizationRule::CommandOverride(_) => "override",
        }
    }
}

impl FromStr for AuthorizationRule {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            None => Err(ConfigError::ParseError("empty authorization rule".into())),
            Some('@') => Ok(AuthorizationRule::PermissionFlag(s.to_string())),
            Some('#') => Ok(AuthorizationRule::GroupMembership(s.to_string())),
            Some(_) => Ok(AuthorizationRule::CommandOverride(s.to_string())),
        }
    }
}

impl TryFrom<String> for AuthorizationRule {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AuthorizationRule> for String {
    fn from(rule: AuthorizationRule) -> Self {
        match rule {
            AuthorizationRule::PermissionFlag(s)
            | AuthorizationRule::GroupMembership(s)
            | AuthorizationRule::CommandOverride(s) => s,
        }
    }
}

impl fmt::Display for AuthorizationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
