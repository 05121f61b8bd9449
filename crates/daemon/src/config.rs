// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration.
//!
//! Settings come from an optional TOML file, then environment overrides.
//! Paths are derived from the state directory and never read from the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use deferq_core::DEFAULT_MIN_CAPACITY;
use serde::Deserialize;

use crate::env;
use crate::error::DaemonError;

/// Daemon configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Cadence at which expired actions are executed
    pub tick_interval_ms: u64,
    /// Heap capacity floor for the scheduler
    pub min_capacity: usize,
    /// Heartbeat period; 0 disables it
    pub heartbeat_secs: u64,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
    /// Root state directory (e.g. ~/.local/state/deferq)
    #[serde(skip)]
    pub state_dir: PathBuf,
    /// Path to daemon log file
    #[serde(skip)]
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            min_capacity: DEFAULT_MIN_CAPACITY,
            heartbeat_secs: 60,
            log_filter: "info".to_string(),
            state_dir: PathBuf::new(),
            log_path: PathBuf::new(),
        }
    }
}

impl Config {
    /// Load the user-level configuration.
    pub fn load() -> Result<Self, DaemonError> {
        let mut config = Self::load_from(&env::config_path()?)?;
        config.apply_env_overrides();
        config.with_state_dir(env::state_dir()?).validated()
    }

    /// Read settings from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, DaemonError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| DaemonError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply DEFERQ_* environment overrides on top of file settings.
    pub fn apply_env_overrides(&mut self) {
        if let Some(ms) = env::tick_interval_ms() {
            self.tick_interval_ms = ms;
        }
        if let Some(capacity) = env::min_capacity() {
            self.min_capacity = capacity;
        }
        if let Some(secs) = env::heartbeat_secs() {
            self.heartbeat_secs = secs;
        }
    }

    /// Derive file paths from the state directory.
    pub fn with_state_dir(mut self, state_dir: PathBuf) -> Self {
        self.log_path = state_dir.join("deferqd.log");
        self.state_dir = state_dir;
        self
    }

    /// Reject settings the scheduler or driver cannot run with.
    pub fn validated(self) -> Result<Self, DaemonError> {
        if self.tick_interval_ms == 0 {
            return Err(DaemonError::InvalidConfig(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.min_capacity == 0 {
            return Err(DaemonError::InvalidConfig(
                "min_capacity must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn heartbeat_interval(&self) -> Option<Duration> {
        (self.heartbeat_secs > 0).then(|| Duration::from_secs(self.heartbeat_secs))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
