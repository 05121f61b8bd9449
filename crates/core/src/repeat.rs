// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Self-rescheduling loops on top of an [`ActionQueue`].

use crate::error::ScheduleError;
use crate::invocation::ActionId;
use crate::scheduler::ActionQueue;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, warn};

type Body = Arc<dyn Fn() + Send + Sync + 'static>;

struct LoopState {
    queue: Arc<dyn ActionQueue>,
    interval_secs: f64,
    body: Body,
    /// Pending occurrence; `stopped` is only flipped while this lock is held
    slot: Mutex<Slot>,
}

#[derive(Default)]
struct Slot {
    current: Option<ActionId>,
    stopped: bool,
}

impl LoopState {
    fn arm(state: &Arc<Self>, slot: &mut Slot) -> Result<(), ScheduleError> {
        if slot.stopped {
            return Ok(());
        }
        let weak: Weak<Self> = Arc::downgrade(state);
        let id = state.queue.schedule_action(
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    Self::fire(&state);
                }
            }),
            state.interval_secs,
        )?;
        slot.current = Some(id);
        Ok(())
    }

    fn fire(state: &Arc<Self>) {
        {
            let mut slot = state.slot.lock();
            if slot.stopped {
                return;
            }
            slot.current = None;
            if let Err(e) = Self::arm(state, &mut slot) {
                warn!(error = %e, "failed to re-arm repeating action");
            }
        }
        (state.body)();
    }
}

/// Runs a body every `interval_secs`, re-arming itself before each run.
///
/// Dropping the handle stops the loop.
pub struct RepeatingAction {
    state: Arc<LoopState>,
}

impl RepeatingAction {
    /// Arm the first occurrence `interval_secs` from now.
    pub fn start<F>(
        queue: Arc<dyn ActionQueue>,
        interval_secs: f64,
        body: F,
    ) -> Result<Self, ScheduleError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let state = Arc::new(LoopState {
            queue,
            interval_secs,
            body: Arc::new(body),
            slot: Mutex::new(Slot::default()),
        });
        {
            let mut slot = state.slot.lock();
            LoopState::arm(&state, &mut slot)?;
        }
        debug!(interval_secs, "started repeating action");
        Ok(Self { state })
    }

    /// Id of the pending occurrence, if any.
    pub fn current_id(&self) -> Option<ActionId> {
        self.state.slot.lock().current
    }

    pub fn is_running(&self) -> bool {
        !self.state.slot.lock().stopped
    }

    /// Cancel the pending occurrence and re-arm a full interval from now.
    pub fn reset(&self) -> Result<(), ScheduleError> {
        let mut slot = self.state.slot.lock();
        if let Some(id) = slot.current.take() {
            self.state.queue.cancel_action(id);
        }
        LoopState::arm(&self.state, &mut slot)
    }

    /// Cancel the pending occurrence and stop re-arming.
    pub fn stop(&self) {
        let mut slot = self.state.slot.lock();
        slot.stopped = true;
        if let Some(id) = slot.current.take() {
            self.state.queue.cancel_action(id);
        }
    }
}

impl Drop for RepeatingAction {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "repeat_tests.rs"]
mod tests;
