// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic liveness log line reporting scheduler load.

use std::sync::Arc;
use std::time::Duration;

use deferq_core::{ActionQueue, RepeatingAction, ScheduleError};
use tracing::info;

/// Log the pending action count every `interval` until the handle is dropped.
pub fn start_heartbeat(
    queue: Arc<dyn ActionQueue>,
    interval: Duration,
) -> Result<RepeatingAction, ScheduleError> {
    let observed = Arc::clone(&queue);
    RepeatingAction::start(queue, interval.as_secs_f64(), move || {
        info!(pending = observed.scheduled_actions_count(), "heartbeat");
    })
}

#[cfg(test)]
#[path = "heartbeat_tests.rs"]
mod tests;
