// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! deferq daemon (deferqd)
//!
//! Hosts a process-wide action scheduler and drives it from a tick task.
//!
//! Architecture:
//! - Tick Task: spawned task executing expired actions on a fixed cadence
//! - Main Task: waits for a shutdown signal, then detaches the driver

use std::sync::Arc;

use deferq_core::{ActionScheduler, SystemClock};
use deferq_daemon::{setup_logging, start_heartbeat, Config, TickDriver};
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle info flags before any config is read
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("deferqd {VERSION}");
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("deferqd {VERSION}");
                println!("deferq daemon - runs deferred actions on a fixed tick");
                println!();
                println!("USAGE:");
                println!("    deferqd");
                println!();
                println!("Settings are read from $DEFERQ_CONFIG (default");
                println!("~/.config/deferq/config.toml) and DEFERQ_* environment overrides.");
                println!();
                println!("OPTIONS:");
                println!("    -h, --help       Print help information");
                println!("    -v, --version    Print version information");
                return Ok(());
            }
            _ => {
                eprintln!("error: unexpected argument '{arg}'");
                eprintln!("Usage: deferqd [--help | --version]");
                std::process::exit(1);
            }
        }
    }

    let config = Config::load()?;
    let _log_guard = setup_logging(&config)?;

    info!(
        tick_interval_ms = config.tick_interval_ms,
        min_capacity = config.min_capacity,
        "starting deferqd"
    );

    let scheduler = Arc::new(ActionScheduler::with_capacity(
        SystemClock,
        config.min_capacity,
    )?);
    let driver = TickDriver::spawn(Arc::clone(&scheduler), config.tick_interval());

    let heartbeat = match config.heartbeat_interval() {
        Some(interval) => Some(start_heartbeat(scheduler.clone(), interval)?),
        None => None,
    };

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!("deferqd ready");
    println!("READY");

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        _ = sigint.recv() => info!("Received SIGINT, shutting down..."),
    }

    if let Some(heartbeat) = heartbeat {
        heartbeat.stop();
    }
    let stats = driver.shutdown().await;
    info!(
        ticks = stats.ticks,
        executed = stats.executed,
        pending = scheduler.scheduled_actions_count(),
        "deferqd stopped"
    );
    Ok(())
}
