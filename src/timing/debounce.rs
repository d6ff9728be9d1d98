//! Trailing-edge debounce.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use crate::timing::Scheduler;

/// Coalesces a burst of calls into a single delayed invocation.
///
/// Every [`call`](Self::call) cancels the previously scheduled action and
/// schedules the new one `wait_ms` out, so only the last action of a burst
/// runs, `wait_ms` after the burst goes quiet. The action is a fresh
/// closure per call; whatever it captured (event coordinates, sizes) is
/// what the surviving invocation sees.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    pending: Option<S::Task>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            pending: None,
        }
    }

    /// Schedule `action`, replacing (and thereby canceling) any pending one.
    pub fn call(&mut self, action: impl FnOnce() + 'static) {
        // Assignment drops the previous task, which cancels it.
        self.pending = Some(self.scheduler.schedule(self.wait_ms, Box::new(action)));
    }

    /// Drop any pending invocation without running it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
