//! Core reload manager implementation.

use crate::loader;
use crate::schema::SessionConfig;
use crate::watcher::ConfigWatcher;
use adminspy_common::ConfigError;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// A missing file is created with defaults. A file that fails to parse
    /// falls back to defaults with a warning. The watcher runs on background
    /// tasks of the current tokio runtime; a reload that fails to parse is
    /// logged and the previous config stays published.
    pub async fn start(config_path: PathBuf) -> (SessionConfig, watch::Receiver<SessionConfig>) {
        let initial_config = match loader::load_or_create(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                SessionConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        tokio::spawn(async move {
            ReloadManager::new(config_path).run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    pub(super) fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Publish reloads on `config_tx` until its last receiver is dropped or
    /// the watcher stops.
    pub(super) async fn run_watch_loop(&self, config_tx: watch::Sender<SessionConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        let watch_task = tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            tokio::select! {
                _ = config_tx.closed() => {
                    info!("all config receivers dropped, stopping reload manager");
                    break;
                }
                msg = change_rx.recv() => match msg {
                    Ok(()) => {
                        info!("reloading config from {}", self.config_path.display());
                        match self.reload_config() {
                            Ok(config) => {
                                if config_tx.send(config).is_err() {
                                    info!("all config receivers dropped, stopping reload manager");
                                    break;
                                }
                            }
                            Err(e) => warn!("config reload failed: {e}"),
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        warn!("config watcher lagged by {n} events");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        info!("config watcher channel closed");
                        break;
                    }
                },
            }
        }

        // Dropping the task releases the notify watch on the directory.
        watch_task.abort();
    }

    fn reload_config(&self) -> Result<SessionConfig, ConfigError> {
        loader::load_from_path(&self.config_path)
    }
}
