// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred action scheduler.
//!
//! Callers schedule one-shot callbacks with a delay and may cancel them
//! before they come due. Nothing runs on its own: a driver calls
//! [`ActionScheduler::execute_expired_actions`] once per tick, which runs
//! every due callback in `(due time, id)` order.
//!
//! Scheduling and cancelling are safe from any thread. The heap and the id
//! index live behind a single lock so they are never observed out of sync.
//! Callbacks always run with the lock released, so they may schedule or
//! cancel other actions.

use crate::clock::{Clock, SystemClock};
use crate::error::{HeapError, ScheduleError};
use crate::heap::{Comparator, MinHeap};
use crate::invocation::{Action, ActionId, InvocationComparator, ScheduledInvocation};
use parking_lot::Mutex;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

/// Object-safe scheduling surface handed to components that only need to
/// defer work, not drive it.
pub trait ActionQueue: Send + Sync {
    /// Schedule `action` to run `delay_secs` seconds from now.
    fn schedule_action(&self, action: Action, delay_secs: f64) -> Result<ActionId, ScheduleError>;

    /// Cancel a pending action. Unknown ids are ignored.
    fn cancel_action(&self, id: ActionId);

    /// Number of actions still pending.
    fn scheduled_actions_count(&self) -> usize;
}

/// Pending invocations plus the id index used for cancellation.
///
/// Every id in `due_times` belongs to exactly one record in `heap`, and
/// every record in `heap` has an entry in `due_times`.
struct Pending<O> {
    heap: MinHeap<ScheduledInvocation, O>,
    due_times: HashMap<ActionId, Instant>,
    next_id: ActionId,
}

impl<O: Comparator<ScheduledInvocation>> Pending<O> {
    fn allocate_id(&mut self) -> ActionId {
        let mut id = self.next_id;
        // Only matters after the counter wraps
        while self.due_times.contains_key(&id) {
            id = id.next();
        }
        self.next_id = id.next();
        id
    }
}

/// Schedules delayed one-shot callbacks and runs them when driven.
pub struct ActionScheduler<C = SystemClock, O = InvocationComparator> {
    clock: C,
    pending: Mutex<Pending<O>>,
}

impl ActionScheduler<SystemClock, InvocationComparator> {
    /// Scheduler on the system clock with default heap settings.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ActionScheduler<SystemClock, InvocationComparator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ActionScheduler<C, InvocationComparator> {
    pub fn with_clock(clock: C) -> Self {
        Self::from_heap(clock, MinHeap::with_default_capacity(InvocationComparator))
    }

    /// Scheduler whose heap never shrinks below `min_capacity`.
    pub fn with_capacity(clock: C, min_capacity: usize) -> Result<Self, HeapError> {
        Self::with_comparator(clock, InvocationComparator, min_capacity)
    }
}

impl<C: Clock, O: Comparator<ScheduledInvocation>> ActionScheduler<C, O> {
    /// Scheduler with a custom ordering for pending records.
    ///
    /// Execution pops records while the smallest one is due, so `comparator`
    /// should order by due time first.
    pub fn with_comparator(clock: C, comparator: O, min_capacity: usize) -> Result<Self, HeapError> {
        let heap = MinHeap::with_comparator(comparator, min_capacity)?;
        Ok(Self::from_heap(clock, heap))
    }

    fn from_heap(clock: C, heap: MinHeap<ScheduledInvocation, O>) -> Self {
        Self {
            clock,
            pending: Mutex::new(Pending {
                heap,
                due_times: HashMap::new(),
                next_id: ActionId::FIRST,
            }),
        }
    }

    /// Time source used to compute due times.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Schedule `action` to run once `delay_secs` seconds have elapsed.
    ///
    /// The returned id can be passed to [`cancel_action`](Self::cancel_action).
    pub fn schedule_action<F>(&self, action: F, delay_secs: f64) -> Result<ActionId, ScheduleError>
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = delay_from_secs(delay_secs)?;
        self.schedule_boxed(Box::new(action), delay)
    }

    /// Schedule `action` to run once `delay` has elapsed.
    pub fn schedule_after<F>(&self, action: F, delay: Duration) -> Result<ActionId, ScheduleError>
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_boxed(Box::new(action), delay)
    }

    fn schedule_boxed(&self, action: Action, delay: Duration) -> Result<ActionId, ScheduleError> {
        let invocation_time = self
            .clock
            .now()
            .checked_add(delay)
            .ok_or(ScheduleError::DelayOverflow)?;

        let id = {
            let mut pending = self.pending.lock();
            let id = pending.allocate_id();
            pending
                .heap
                .insert(ScheduledInvocation::new(action, invocation_time, id));
            pending.due_times.insert(id, invocation_time);
            id
        };

        debug!(action_id = %id, delay_secs = delay.as_secs_f64(), "scheduled action");
        Ok(id)
    }

    /// Cancel a pending action.
    ///
    /// Ids that already ran, were already cancelled, or were never issued
    /// are ignored.
    pub fn cancel_action(&self, id: ActionId) {
        // The removed callback is dropped after the lock is released
        let removed = {
            let mut pending = self.pending.lock();
            match pending.due_times.remove(&id) {
                Some(_) => pending.heap.remove_by(|invocation| invocation.id() == id),
                None => None,
            }
        };
        if removed.is_some() {
            debug!(action_id = %id, "cancelled action");
        }
    }

    /// Run every action whose due time has passed.
    ///
    /// Due records are drained under the lock, then run in `(due time, id)`
    /// order with the lock released. A panicking callback is logged and the
    /// rest of the batch still runs. Returns the number of callbacks run.
    ///
    /// Must not be called concurrently with itself.
    pub fn execute_expired_actions(&self) -> usize {
        let expired = self.take_expired();
        let executed = expired.len();

        for invocation in expired {
            let id = invocation.id();
            let action = invocation.into_action();
            match panic::catch_unwind(AssertUnwindSafe(action)) {
                Ok(()) => trace!(action_id = %id, "executed action"),
                Err(payload) => error!(
                    action_id = %id,
                    panic = panic_message(payload.as_ref()),
                    "scheduled action panicked"
                ),
            }
        }

        executed
    }

    fn take_expired(&self) -> Vec<ScheduledInvocation> {
        let mut pending = self.pending.lock();
        let now = self.clock.now();
        let mut expired = Vec::new();
        while pending.heap.min().is_some_and(|next| next.is_due(now)) {
            let Ok(invocation) = pending.heap.extract_min() else {
                break;
            };
            pending.due_times.remove(&invocation.id());
            expired.push(invocation);
        }
        expired
    }

    /// Number of actions still pending.
    pub fn scheduled_actions_count(&self) -> usize {
        self.pending.lock().heap.len()
    }

    pub fn has_actions(&self) -> bool {
        !self.pending.lock().heap.is_empty()
    }

    /// Due time of the next action to run.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .lock()
            .heap
            .min()
            .map(ScheduledInvocation::invocation_time)
    }
}

impl<C, O> ActionQueue for ActionScheduler<C, O>
where
    C: Clock,
    O: Comparator<ScheduledInvocation> + Send,
{
    fn schedule_action(&self, action: Action, delay_secs: f64) -> Result<ActionId, ScheduleError> {
        let delay = delay_from_secs(delay_secs)?;
        self.schedule_boxed(action, delay)
    }

    fn cancel_action(&self, id: ActionId) {
        Self::cancel_action(self, id);
    }

    fn scheduled_actions_count(&self) -> usize {
        Self::scheduled_actions_count(self)
    }
}

impl<C, O> fmt::Debug for ActionScheduler<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self.pending.lock();
        f.debug_struct("ActionScheduler")
            .field("pending", &pending.heap.len())
            .field("next_id", &pending.next_id)
            .finish_non_exhaustive()
    }
}

fn delay_from_secs(delay_secs: f64) -> Result<Duration, ScheduleError> {
    if !delay_secs.is_finite() || delay_secs < 0.0 {
        return Err(ScheduleError::InvalidDelay(delay_secs));
    }
    Duration::try_from_secs_f64(delay_secs).map_err(|_| ScheduleError::DelayOverflow)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
