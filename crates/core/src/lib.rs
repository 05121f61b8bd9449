// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! deferq-core: deferred action scheduling
//!
//! A min-heap of scheduled invocations behind a lock, driven by an external
//! tick. See [`ActionScheduler`] for the entry point.

pub mod clock;
pub mod error;
pub mod heap;
pub mod invocation;
pub mod repeat;
pub mod scheduler;

pub use clock::{Clock, FakeClock, SystemClock};
pub use error::{HeapError, ScheduleError};
pub use heap::{Comparator, MinHeap, NaturalOrder, NoneLast, DEFAULT_MIN_CAPACITY};
pub use invocation::{Action, ActionId, InvocationComparator, ScheduledInvocation};
pub use repeat::RepeatingAction;
pub use scheduler::{ActionQueue, ActionScheduler};
