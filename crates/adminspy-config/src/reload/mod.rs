//! Live config reload manager.
//!
//! Combines the file watcher with config loading. Reloaded configs are
//! published on a watch channel; the host drains it between game events
//! and hands each value to [`crate::ConfigPolicy::on_reload`].

mod manager;


pub use manager::ReloadManager;
