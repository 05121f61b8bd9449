// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tick driver: runs a scheduler's expired actions on a fixed cadence.
//!
//! The scheduler never drives itself. Attaching it to a [`TickDriver`]
//! spawns a tokio task that ticks it until the driver is shut down or
//! dropped.

use std::sync::Arc;
use std::time::{Duration, Instant};

use deferq_core::{ActionScheduler, Clock, Comparator, ScheduledInvocation};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Shortest cadence accepted; zero would spin the runtime
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Something that can be advanced one step.
pub trait Tick: Send + Sync + 'static {
    /// Run one step, returning how many actions it executed.
    fn tick(&self) -> usize;
}

impl<C, O> Tick for ActionScheduler<C, O>
where
    C: Clock,
    O: Comparator<ScheduledInvocation> + Send + 'static,
{
    fn tick(&self) -> usize {
        self.execute_expired_actions()
    }
}

/// Clock that follows tokio's timer, so paused test time also moves
/// scheduled due times.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Counters reported when a driver stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub executed: u64,
}

/// Handle to a running tick task.
///
/// Dropping the handle aborts the task; prefer [`TickDriver::shutdown`] to
/// let an in-flight tick finish.
pub struct TickDriver {
    shutdown: Arc<Notify>,
    task: Option<JoinHandle<TickStats>>,
}

impl TickDriver {
    /// Attach `target` to a task ticking every `interval`.
    ///
    /// Callbacks run on the driver task, so long-running work should be
    /// handed off from inside the callback. Missed ticks are skipped.
    pub fn spawn<T: Tick>(target: Arc<T>, interval: Duration) -> Self {
        let interval = interval.max(MIN_TICK_INTERVAL);
        let shutdown = Arc::new(Notify::new());
        let task = tokio::spawn(run(target, interval, Arc::clone(&shutdown)));
        info!(?interval, "tick driver attached");
        Self {
            shutdown,
            task: Some(task),
        }
    }

    /// Stop ticking and wait for the task to finish.
    pub async fn shutdown(mut self) -> TickStats {
        self.shutdown.notify_one();
        let Some(task) = self.task.take() else {
            return TickStats::default();
        };
        match task.await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "tick driver task failed");
                TickStats::default()
            }
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run<T: Tick>(target: Arc<T>, interval: Duration, shutdown: Arc<Notify>) -> TickStats {
    // NOTE: created once outside the loop so select! does not reset it
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut stats = TickStats::default();

    loop {
        tokio::select! {
            biased;

            _ = shutdown.notified() => break,

            _ = ticker.tick() => {
                let executed = target.tick();
                stats.ticks += 1;
                stats.executed += executed as u64;
                if executed > 0 {
                    debug!(executed, "executed expired actions");
                }
            }
        }
    }

    info!(
        ticks = stats.ticks,
        executed = stats.executed,
        "tick driver detached"
    );
    stats
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
