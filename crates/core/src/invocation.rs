// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduled invocation records and their ordering.

use crate::heap::Comparator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

/// Identifier handed out by [`ActionScheduler::schedule_action`](crate::ActionScheduler::schedule_action).
///
/// Ids start at 1 and increase with every scheduled action, so among actions
/// due at the same instant a smaller id was scheduled earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(u64);

impl ActionId {
    /// Smallest id ever issued.
    pub const FIRST: ActionId = ActionId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, wrapping back to [`ActionId::FIRST`].
    pub fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(value) => Self(value),
            None => Self::FIRST,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-shot callback run when an invocation comes due.
pub type Action = Box<dyn FnOnce() + Send + 'static>;

/// A callback together with its due time and id.
///
/// Identity is the id: two records are equal exactly when their ids are.
pub struct ScheduledInvocation {
    action: Action,
    invocation_time: Instant,
    id: ActionId,
}

impl ScheduledInvocation {
    pub fn new(action: Action, invocation_time: Instant, id: ActionId) -> Self {
        Self {
            action,
            invocation_time,
            id,
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn invocation_time(&self) -> Instant {
        self.invocation_time
    }

    /// Whether the invocation is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.invocation_time <= now
    }

    pub fn into_action(self) -> Action {
        self.action
    }
}

impl fmt::Debug for ScheduledInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledInvocation")
            .field("id", &self.id)
            .field("invocation_time", &self.invocation_time)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ScheduledInvocation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ScheduledInvocation {}

/// Orders invocations by due time, then by id.
///
/// Wrap in [`NoneLast`](crate::NoneLast) to order optional records with
/// absent entries last.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvocationComparator;

impl Comparator<ScheduledInvocation> for InvocationComparator {
    fn compare(&self, a: &ScheduledInvocation, b: &ScheduledInvocation) -> Ordering {
        a.invocation_time
            .cmp(&b.invocation_time)
            .then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
