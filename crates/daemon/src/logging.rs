// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup and log file rotation.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::DaemonError;

/// Rotate the daemon log once it grows past this size (10 MiB)
pub const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept (`deferqd.log.1` ..= `deferqd.log.N`)
pub const MAX_ROTATIONS: u32 = 3;

/// Install the global subscriber writing to the configured log file.
///
/// The returned guard flushes buffered lines on drop and must be held for
/// the lifetime of the process.
pub fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, DaemonError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = config.log_path.parent().ok_or(DaemonError::NoStateDir)?;
    std::fs::create_dir_all(log_dir)?;
    rotate_log_if_needed(&config.log_path);

    let file_appender = tracing_appender::rolling::never(
        log_dir,
        config
            .log_path
            .file_name()
            .ok_or(DaemonError::NoStateDir)?,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

/// Shift `log` to `log.1` (and older rotations up by one) when it is too large.
///
/// Best-effort: rotation failures leave the current file in place.
pub fn rotate_log_if_needed(log: &Path) {
    let Ok(meta) = std::fs::metadata(log) else {
        return;
    };
    if meta.len() <= MAX_LOG_SIZE {
        return;
    }

    let _ = std::fs::remove_file(rotation_path(log, MAX_ROTATIONS));
    for n in (1..MAX_ROTATIONS).rev() {
        let from = rotation_path(log, n);
        if from.exists() {
            let _ = std::fs::rename(&from, rotation_path(log, n + 1));
        }
    }
    let _ = std::fs::rename(log, rotation_path(log, 1));
}

fn rotation_path(log: &Path, n: u32) -> PathBuf {
    let mut name = log.as_os_str().to_os_string();
    name.push(format!(".{n}"));
    PathBuf::from(name)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
