//! Execution order specs
//!
//! Actions due in the same tick run by due time, and actions due at the same
//! instant run in the order they were scheduled.

use crate::prelude::*;

#[test]
fn same_instant_actions_run_in_schedule_order() {
    let (_clock, scheduler) = fake_scheduler();
    let trace = Trace::new();

    scheduler.schedule_action(trace.step("A"), 0.0).unwrap();
    scheduler.schedule_action(trace.step("B"), 0.0).unwrap();
    scheduler.execute_expired_actions();

    assert_eq!(trace.names(), vec!["A", "B"]);
}

#[test]
fn delayed_action_runs_after_clock_passes_due_time() {
    let (clock, scheduler) = fake_scheduler();
    let trace = Trace::new();

    scheduler.schedule_action(trace.step("C"), 100.0).unwrap();
    scheduler.execute_expired_actions();
    assert!(trace.names().is_empty());
    assert_eq!(scheduler.scheduled_actions_count(), 1);

    clock.advance(Duration::from_secs(100));
    scheduler.execute_expired_actions();
    assert_eq!(trace.names(), vec!["C"]);
    assert_eq!(scheduler.scheduled_actions_count(), 0);
}

#[test]
fn mixed_delays_run_by_due_time_then_schedule_order() {
    let (clock, scheduler) = fake_scheduler();
    let trace = Trace::new();

    scheduler.schedule_action(trace.step("t2-first"), 2.0).unwrap();
    scheduler.schedule_action(trace.step("t1"), 1.0).unwrap();
    scheduler.schedule_action(trace.step("t2-second"), 2.0).unwrap();
    scheduler.schedule_action(trace.step("t0"), 0.0).unwrap();

    clock.advance(Duration::from_secs(2));
    assert_eq!(scheduler.execute_expired_actions(), 4);
    assert_eq!(trace.names(), vec!["t0", "t1", "t2-first", "t2-second"]);
}

#[test]
fn thousands_of_actions_drain_in_order() {
    let (clock, scheduler) = fake_scheduler();
    let seen = std::sync::Arc::new(Mutex::new(Vec::new()));

    for i in 0..2_000u32 {
        let seen = std::sync::Arc::clone(&seen);
        let delay = f64::from((i * 7919) % 500);
        scheduler
            .schedule_action(move || seen.lock().push((delay as u64, i)), delay)
            .unwrap();
    }

    clock.advance(Duration::from_secs(500));
    assert_eq!(scheduler.execute_expired_actions(), 2_000);

    let seen = seen.lock().clone();
    let mut sorted = seen.clone();
    sorted.sort();
    assert_eq!(seen, sorted);
}
