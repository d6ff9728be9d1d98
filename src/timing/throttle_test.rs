use super::super::schedule::testing::ManualScheduler;
use super::*;
use std::cell::RefCell;

// =============================================================
// Window behavior
// =============================================================

#[test]
fn first_call_of_burst_runs_immediately() {
    let sched = ManualScheduler::new();
    let mut throttler = Throttler::new(sched.clone(), 100);
    let log = RefCell::new(Vec::new());

    // Calls at t=0, 10, 30, 90; limit = 100.
    throttler.call(|| log.borrow_mut().push(0u64));
    assert_eq!(*log.borrow(), vec![0]);

    sched.advance(10);
    throttler.call(|| log.borrow_mut().push(10));
    sched.advance(20);
    throttler.call(|| log.borrow_mut().push(30));
    sched.advance(60);
    throttler.call(|| log.borrow_mut().push(90));
    assert_eq!(*log.borrow(), vec![0]);

    // Cooldown expired at t=100; a call at t=150 runs immediately.
    sched.advance(60);
    throttler.call(|| log.borrow_mut().push(150));
    assert_eq!(*log.borrow(), vec![0, 150]);
}

#[test]
fn never_more_than_one_invocation_per_window() {
    let sched = ManualScheduler::new();
    let mut throttler = Throttler::new(sched.clone(), 100);
    let count = RefCell::new(0u32);

    // Hammer it every 7ms for a full second.
    let mut windows_started = 0u32;
    for _ in 0..143 {
        let before = *count.borrow();
        throttler.call(|| *count.borrow_mut() += 1);
        if *count.borrow() > before {
            windows_started += 1;
        }
        sched.advance(7);
    }

    // 143 * 7 = 1001ms of events; at most one invocation per 100ms window.
    assert_eq!(*count.borrow(), windows_started);
    assert!(*count.borrow() <= 11);
    assert!(*count.borrow() >= 10);
}

#[test]
fn dropped_calls_are_not_queued() {
    let sched = ManualScheduler::new();
    let mut throttler = Throttler::new(sched.clone(), 100);
    let log = RefCell::new(Vec::new());

    throttler.call(|| log.borrow_mut().push("a"));
    throttler.call(|| log.borrow_mut().push("b"));

    // Nothing fires later on behalf of the dropped call.
    sched.advance(1000);
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn call_exactly_at_window_end_runs() {
    let sched = ManualScheduler::new();
    let mut throttler = Throttler::new(sched.clone(), 100);
    let log = RefCell::new(Vec::new());

    throttler.call(|| log.borrow_mut().push(0u64));
    sched.advance(100);
    throttler.call(|| log.borrow_mut().push(100));
    assert_eq!(*log.borrow(), vec![0, 100]);
}

#[test]
fn zero_limit_clears_cooldown_on_next_tick() {
    let sched = ManualScheduler::new();
    let mut throttler = Throttler::new(sched.clone(), 0);
    let count = RefCell::new(0u32);

    throttler.call(|| *count.borrow_mut() += 1);
    // Same instant, cooldown still open until the timer runs.
    throttler.call(|| *count.borrow_mut() += 1);
    assert_eq!(*count.borrow(), 1);

    sched.advance(0);
    throttler.call(|| *count.borrow_mut() += 1);
    assert_eq!(*count.borrow(), 2);
}
