//! Tick driver specs
//!
//! A scheduler attached to a driver runs due actions without any explicit
//! calls from the test.

use crate::prelude::*;
use deferq_core::RepeatingAction;
use deferq_daemon::{TickDriver, TokioClock};
use std::sync::Arc;

#[tokio::test(start_paused = true)]
async fn driver_runs_due_actions_in_order() {
    let scheduler = Arc::new(ActionScheduler::with_clock(TokioClock));
    let trace = Trace::new();
    scheduler.schedule_action(trace.step("later"), 2.0).unwrap();
    scheduler.schedule_action(trace.step("sooner"), 1.0).unwrap();

    let driver = TickDriver::spawn(Arc::clone(&scheduler), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    let stats = driver.shutdown().await;

    assert_eq!(trace.names(), vec!["sooner", "later"]);
    assert_eq!(stats.executed, 2);
    assert_eq!(scheduler.scheduled_actions_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn callbacks_may_schedule_from_driver_task() {
    let scheduler = Arc::new(ActionScheduler::with_clock(TokioClock));
    let trace = Trace::new();

    let inner = Arc::clone(&scheduler);
    let follow_up = trace.step("follow-up");
    let first = trace.step("first");
    scheduler
        .schedule_action(
            move || {
                first();
                inner.schedule_action(follow_up, 0.5).unwrap();
            },
            0.0,
        )
        .unwrap();

    let driver = TickDriver::spawn(Arc::clone(&scheduler), Duration::from_millis(50));
    tokio::time::sleep(Duration::from_secs(1)).await;
    driver.shutdown().await;

    assert_eq!(trace.names(), vec!["first", "follow-up"]);
}

#[tokio::test(start_paused = true)]
async fn repeating_action_fires_each_interval_under_driver() {
    let scheduler = Arc::new(ActionScheduler::with_clock(TokioClock));
    let count = Arc::new(Mutex::new(0u32));

    let seen = Arc::clone(&count);
    let repeating = RepeatingAction::start(scheduler.clone(), 1.0, move || {
        *seen.lock() += 1;
    })
    .unwrap();

    let driver = TickDriver::spawn(Arc::clone(&scheduler), Duration::from_millis(100));
    tokio::time::sleep(Duration::from_millis(3_050)).await;
    repeating.stop();
    driver.shutdown().await;

    assert_eq!(*count.lock(), 3);
    assert_eq!(scheduler.scheduled_actions_count(), 0);
}
