//! Callback failure isolation specs

use crate::prelude::*;

#[test]
fn panicking_callback_does_not_abort_batch() {
    let (_clock, scheduler) = fake_scheduler();
    let trace = Trace::new();

    scheduler
        .schedule_action(|| panic!("first callback fails"), 0.0)
        .unwrap();
    scheduler.schedule_action(trace.step("second"), 0.0).unwrap();

    assert_eq!(scheduler.execute_expired_actions(), 2);
    assert_eq!(trace.names(), vec!["second"]);
    assert_eq!(scheduler.scheduled_actions_count(), 0);
    assert_eq!(scheduler.next_deadline(), None);
}
