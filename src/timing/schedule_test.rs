use super::testing::ManualScheduler;
use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let log_for_make = Rc::clone(&log);
    let make = move |tag: &'static str| -> Box<dyn FnOnce()> {
        let log = Rc::clone(&log_for_make);
        Box::new(move || log.borrow_mut().push(tag))
    };
    (log, make)
}

// =============================================================
// ManualScheduler basics
// =============================================================

#[test]
fn task_fires_when_clock_reaches_due_time() {
    let sched = ManualScheduler::new();
    let (log, make) = recorder();

    let _task = sched.schedule(100, make("a"));
    sched.advance(99);
    assert!(log.borrow().is_empty());
    sched.advance(1);
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn dropped_task_never_fires() {
    let sched = ManualScheduler::new();
    let (log, make) = recorder();

    let task = sched.schedule(50, make("a"));
    drop(task);
    sched.advance(1000);
    assert!(log.borrow().is_empty());
    assert_eq!(sched.pending(), 0);
}

#[test]
fn tasks_fire_in_due_order() {
    let sched = ManualScheduler::new();
    let (log, make) = recorder();

    let _b = sched.schedule(200, make("b"));
    let _a = sched.schedule(100, make("a"));
    sched.advance(500);
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn same_due_time_fires_in_schedule_order() {
    let sched = ManualScheduler::new();
    let (log, make) = recorder();

    let _a = sched.schedule(100, make("a"));
    let _b = sched.schedule(100, make("b"));
    sched.advance(100);
    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn zero_delay_fires_on_next_advance() {
    let sched = ManualScheduler::new();
    let (log, make) = recorder();

    let _task = sched.schedule(0, make("a"));
    assert!(log.borrow().is_empty());
    sched.advance(0);
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn callback_scheduled_inside_callback_can_fire_in_same_advance() {
    let sched = ManualScheduler::new();
    let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

    let sched_inner = sched.clone();
    let log_outer = Rc::clone(&log);
    let log_inner = Rc::clone(&log);
    // The inner task handle is dropped immediately; keep it alive in a slot.
    let slot: Rc<RefCell<Option<<ManualScheduler as Scheduler>::Task>>> =
        Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let _outer = sched.schedule(
        100,
        Box::new(move || {
            log_outer.borrow_mut().push("outer");
            let task = sched_inner.schedule(
                50,
                Box::new(move || log_inner.borrow_mut().push("inner")),
            );
            *slot_for_cb.borrow_mut() = Some(task);
        }),
    );

    sched.advance(150);
    assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    assert_eq!(sched.now(), 150);
}
