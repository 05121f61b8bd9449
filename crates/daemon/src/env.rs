// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;

use crate::error::DaemonError;

/// Resolve state directory: DEFERQ_STATE_DIR > XDG_STATE_HOME/deferq > ~/.local/state/deferq
pub fn state_dir() -> Result<PathBuf, DaemonError> {
    if let Ok(dir) = std::env::var("DEFERQ_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("deferq"));
    }
    let home = std::env::var("HOME").map_err(|_| DaemonError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/deferq"))
}

/// Resolve config file: DEFERQ_CONFIG > XDG_CONFIG_HOME/deferq/config.toml > ~/.config/deferq/config.toml
pub fn config_path() -> Result<PathBuf, DaemonError> {
    if let Ok(path) = std::env::var("DEFERQ_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("deferq/config.toml"));
    }
    let home = std::env::var("HOME").map_err(|_| DaemonError::NoConfigDir)?;
    Ok(PathBuf::from(home).join(".config/deferq/config.toml"))
}

/// Tick interval override
pub fn tick_interval_ms() -> Option<u64> {
    parsed("DEFERQ_TICK_MS")
}

/// Heap capacity floor override
pub fn min_capacity() -> Option<usize> {
    parsed("DEFERQ_MIN_CAPACITY")
}

/// Heartbeat interval override (0 disables)
pub fn heartbeat_secs() -> Option<u64> {
    parsed("DEFERQ_HEARTBEAT_SECS")
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse::<T>().ok())
}
