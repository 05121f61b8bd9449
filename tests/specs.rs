//! Behavioral specifications for deferq.
//!
//! These tests use only the public API of the core and daemon crates and
//! check observable behavior: what runs, in which order, and what remains
//! pending.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// scheduler/
#[path = "specs/scheduler/cancel.rs"]
mod scheduler_cancel;
#[path = "specs/scheduler/isolation.rs"]
mod scheduler_isolation;
#[path = "specs/scheduler/ordering.rs"]
mod scheduler_ordering;

// daemon/
#[path = "specs/daemon/driver.rs"]
mod daemon_driver;
