//! Leading-edge throttle.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::timing::Scheduler;

/// Bounds a handler to at most one invocation per `limit_ms` window.
///
/// The first call of a window runs synchronously and starts a cooldown;
/// calls during the cooldown are dropped outright (no queuing). Unlike
/// [`Debouncer`](crate::timing::Debouncer) the first event of a burst is
/// serviced immediately, which matters for effects the user should see
/// start right away, like the navbar scroll-state class.
pub struct Throttler<S: Scheduler> {
    scheduler: S,
    limit_ms: u32,
    in_cooldown: Rc<Cell<bool>>,
    reset: Option<S::Task>,
}

impl<S: Scheduler> Throttler<S> {
    pub fn new(scheduler: S, limit_ms: u32) -> Self {
        Self {
            scheduler,
            limit_ms,
            in_cooldown: Rc::new(Cell::new(false)),
            reset: None,
        }
    }

    /// Run `action` now unless a cooldown window is open.
    pub fn call(&mut self, action: impl FnOnce()) {
        if self.in_cooldown.get() {
            return;
        }
        action();
        self.in_cooldown.set(true);

        let flag = Rc::clone(&self.in_cooldown);
        self.reset = Some(
            self.scheduler
                .schedule(self.limit_ms, Box::new(move || flag.set(false))),
        );
    }
}
