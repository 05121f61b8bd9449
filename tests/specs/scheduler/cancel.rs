//! Cancellation specs

use crate::prelude::*;

#[test]
fn cancelled_action_never_runs() {
    let (clock, scheduler) = fake_scheduler();
    let trace = Trace::new();

    let id = scheduler.schedule_action(trace.step("cancelled"), 10.0).unwrap();
    assert_eq!(scheduler.scheduled_actions_count(), 1);
    scheduler.cancel_action(id);
    assert_eq!(scheduler.scheduled_actions_count(), 0);

    clock.advance(Duration::from_secs(60));
    scheduler.execute_expired_actions();
    assert!(trace.names().is_empty());
}

#[test]
fn cancel_twice_or_after_run_is_harmless() {
    let (_clock, scheduler) = fake_scheduler();
    let trace = Trace::new();

    let ran = scheduler.schedule_action(trace.step("ran"), 0.0).unwrap();
    scheduler.execute_expired_actions();
    scheduler.cancel_action(ran);

    let pending = scheduler.schedule_action(trace.step("pending"), 5.0).unwrap();
    scheduler.cancel_action(pending);
    scheduler.cancel_action(pending);
    scheduler.cancel_action(ActionId::new(12_345));

    assert_eq!(trace.names(), vec!["ran"]);
    assert_eq!(scheduler.scheduled_actions_count(), 0);
}

#[test]
fn negative_delay_is_rejected_without_side_effects() {
    let (_clock, scheduler) = fake_scheduler();
    scheduler.schedule_action(|| {}, 3.0).unwrap();

    let err = scheduler.schedule_action(|| {}, -1.0).unwrap_err();
    assert_eq!(err, ScheduleError::InvalidDelay(-1.0));
    assert_eq!(scheduler.scheduled_actions_count(), 1);
}
