//! Configuration for TaskStore
//!
//! Centralized configuration with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Main configuration for a TaskStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing snapshot file. Its parent directory is created on open and
    /// also holds the temp file used during writes:
    ///   {dir}/
    ///     ├── tasks.json       (current snapshot)
    ///     └── tasks.json.tmp   (only present mid-write)
    pub db_path: PathBuf,

    /// Sync strategy: whether snapshot writes are fsynced
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Default log filter when RUST_LOG is not set
    pub log_level: String,
}

/// Snapshot sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the temp file before rename and the directory after (safest)
    EveryWrite,

    /// Leave flushing to the OS. Rename is still atomic, but a power loss
    /// may lose the latest snapshot.
    OsBuffered,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(Self::DEFAULT_DB_PATH),
            sync_strategy: SyncStrategy::EveryWrite,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    const DEFAULT_DB_PATH: &'static str = "./data/tasks.json";
    const DEFAULT_LOG_LEVEL: &'static str = "info";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load config from the environment
    ///
    /// Reads `DB_PATH` and `LOG_LEVEL`. Unset or blank values keep defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(path) = env_value("DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = env_value("LOG_LEVEL") {
            config.log_level = level;
        }
        config
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Set the snapshot sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the default log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
