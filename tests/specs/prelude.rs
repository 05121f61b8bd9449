//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::sync::Arc;

pub use deferq_core::{ActionId, ActionScheduler, FakeClock, ScheduleError};
pub use parking_lot::Mutex;
pub use std::time::Duration;

/// Ordered record of callback names, shared with scheduled closures.
#[derive(Clone, Default)]
pub struct Trace(Arc<Mutex<Vec<&'static str>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closure that appends `name` when run.
    pub fn step(&self, name: &'static str) -> impl FnOnce() + Send + 'static {
        let inner = Arc::clone(&self.0);
        move || inner.lock().push(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().clone()
    }
}

/// Scheduler on a manually advanced clock.
pub fn fake_scheduler() -> (FakeClock, ActionScheduler<FakeClock>) {
    let clock = FakeClock::new();
    let scheduler = ActionScheduler::with_clock(clock.clone());
    (clock, scheduler)
}
