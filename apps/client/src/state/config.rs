//! # Application Configuration
//!
//! Startup configuration: where the durable store lives and how long the
//! simulated network delay runs.
//!
//! ## Store Path Resolution
//! 1. `SECONDSTYLE_STORE_PATH` environment variable (development override)
//! 2. Platform data directory via `directories::ProjectDirs`:
//!    - macOS: `~/Library/Application Support/com.secondstyle.app/secondstyle.db`
//!    - Windows: `%APPDATA%\secondstyle\app\secondstyle.db`
//!    - Linux: `~/.local/share/secondstyle-app/secondstyle.db`

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use secondstyle_store::StoreConfig;

use crate::error::ApiError;

/// Artificial network delay before a form submission completes.
/// Stands in for the round-trip the client doesn't make.
pub const DEFAULT_NETWORK_DELAY: Duration = Duration::from_millis(1000);

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Durable store configuration.
    pub store: StoreConfig,

    /// Simulated network delay applied to form submissions.
    pub network_delay: Duration,
}

impl AppConfig {
    /// Configuration over an explicit store config, default delay.
    pub fn new(store: StoreConfig) -> Self {
        AppConfig {
            store,
            network_delay: DEFAULT_NETWORK_DELAY,
        }
    }

    /// Resolves the store path from the environment and platform defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(AppConfig::new(StoreConfig::new(default_store_path()?)))
    }

    /// Sets the simulated network delay.
    pub fn network_delay(mut self, delay: Duration) -> Self {
        self.network_delay = delay;
        self
    }

    /// In-memory store, zero delay. What almost every test wants.
    pub fn for_tests() -> Self {
        AppConfig::new(StoreConfig::in_memory()).network_delay(Duration::ZERO)
    }
}

/// Determines the store file path.
///
/// ## Resolution Order
/// `SECONDSTYLE_STORE_PATH` env var, then the platform data directory
/// (created if missing).
pub fn default_store_path() -> Result<PathBuf, ApiError> {
    if let Ok(path) = std::env::var("SECONDSTYLE_STORE_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "secondstyle", "app")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .map_err(|e| ApiError::internal(format!("Could not create data directory: {}", e)))?;

    Ok(data_dir.join("secondstyle.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_tests_uses_memory_and_zero_delay() {
        let config = AppConfig::for_tests();
        assert_eq!(config.network_delay, Duration::ZERO);
        assert_eq!(config.store.store_path.to_str(), Some(":memory:"));
    }

    #[test]
    fn test_builder_overrides_delay() {
        let config = AppConfig::for_tests().network_delay(Duration::from_millis(5));
        assert_eq!(config.network_delay, Duration::from_millis(5));
    }
}
