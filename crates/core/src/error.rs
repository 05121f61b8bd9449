// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the heap and the action scheduler

use thiserror::Error;

/// Errors raised by [`MinHeap`](crate::MinHeap) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("cannot extract min: heap is empty")]
    Empty,
    #[error("minimum capacity must be more than 0, got {0}")]
    InvalidCapacity(usize),
}

/// Errors raised when scheduling an action.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidDelay(f64),
    #[error("delay pushes the due time past the representable range")]
    DelayOverflow,
}
