// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! deferq daemon library
//!
//! Host-side pieces around the scheduler core: configuration, logging, and
//! the tick driver that executes expired actions on a fixed cadence.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod driver;
pub mod env;
mod error;
mod heartbeat;
pub mod logging;

pub use config::Config;
pub use driver::{Tick, TickDriver, TickStats, TokioClock, MIN_TICK_INTERVAL};
pub use error::DaemonError;
pub use heartbeat::start_heartbeat;
pub use logging::setup_logging;
