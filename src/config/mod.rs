//! Configuration management for boardctl

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

impl Config {
    /// Get the config file path (~/.config/boardctl/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/boardctl)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Remote fetch timeout as a `Duration`.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }

    /// Event loop tick rate as a `Duration`.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
