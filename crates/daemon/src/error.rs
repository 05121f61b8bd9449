// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon error types

use std::path::PathBuf;

use deferq_core::{HeapError, ScheduleError};
use thiserror::Error;

/// Errors raised while configuring or running the daemon
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("could not determine state directory (set DEFERQ_STATE_DIR or HOME)")]
    NoStateDir,
    #[error("could not determine config directory (set DEFERQ_CONFIG or HOME)")]
    NoConfigDir,
    #[error("scheduler error: {0}")]
    Heap(#[from] HeapError),
    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}
