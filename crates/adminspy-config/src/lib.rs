//! AdminSpy configuration system.
//!
//! Loads the session config (JSON as written by the plugin host, or TOML),
//! parses authorization rules once up front, validates, and supports live
//! reload. Stale config versions are flagged by [`ConfigPolicy`] but never
//! rejected. Also hosts the localization phrasebook used to render relay
//! lines.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use adminspy_config::{load_or_create, ConfigPolicy};
//! use std::path::Path;
//!
//! let config = load_or_create(Path::new("configs/AdminSpy/AdminSpy.json"))
//!     .expect("failed to load config");
//! let policy = ConfigPolicy::new(config);
//! assert!(policy.config().chat_relay_enabled);
//! ```

pub mod loader;
pub mod locale;
pub mod policy;
pub mod reload;
pub mod rules;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_from_path, load_from_str, load_or_create, ConfigFormat};
pub use locale::{ChatColor, Phrasebook};
pub use policy::{ConfigPolicy, VersionMismatch};
pub use reload::ReloadManager;
pub use rules::AuthorizationRule;
pub use schema::{SessionConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;
