//! Logging bootstrap for hosts embedding the relay engine.

use tracing_subscriber::EnvFilter;

/// Directive used when neither the caller nor `RUST_LOG` provides one.
pub const DEFAULT_LOG_DIRECTIVE: &str = "adminspy=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `directive` (or [`DEFAULT_LOG_DIRECTIVE`]).
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(directive: Option<&str>) -> bool {
    let fallback = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
