//! Repeating tick timer built on one-shot scheduling.

#[cfg(test)]
#[path = "metronome_test.rs"]
mod metronome_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::timing::Scheduler;

/// Fires `tick` every `period_ms`, rescheduling itself after each fire.
///
/// [`restart`](Self::restart) cancels the pending tick and arms a fresh
/// full period, so a manual action (a carousel dot click) pushes the next
/// automatic tick a whole period out instead of letting it land early.
pub struct Metronome<S: Scheduler + 'static> {
    scheduler: Rc<S>,
    period_ms: u32,
    tick: Rc<dyn Fn()>,
    slot: Rc<RefCell<Option<S::Task>>>,
}

impl<S: Scheduler + 'static> Metronome<S> {
    /// Create a stopped metronome; call [`restart`](Self::restart) to arm it.
    pub fn new(scheduler: S, period_ms: u32, tick: impl Fn() + 'static) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            period_ms,
            tick: Rc::new(tick),
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Arm (or re-arm) the timer for a full period from now.
    pub fn restart(&self) {
        arm(&self.scheduler, self.period_ms, &self.slot, &self.tick);
    }

    /// Cancel the pending tick.
    pub fn stop(&self) {
        self.slot.borrow_mut().take();
    }
}

impl<S: Scheduler + 'static> Drop for Metronome<S> {
    fn drop(&mut self) {
        // The pending task's closure holds the slot alive; without this the
        // timer would keep ticking after the owning widget is gone.
        self.stop();
    }
}

fn arm<S: Scheduler + 'static>(
    scheduler: &Rc<S>,
    period_ms: u32,
    slot: &Rc<RefCell<Option<S::Task>>>,
    tick: &Rc<dyn Fn()>,
) {
    let scheduler_next = Rc::clone(scheduler);
    let slot_next = Rc::clone(slot);
    let tick_next = Rc::clone(tick);
    let task = scheduler.schedule(
        period_ms,
        Box::new(move || {
            tick_next();
            arm(&scheduler_next, period_ms, &slot_next, &tick_next);
        }),
    );
    *slot.borrow_mut() = Some(task);
}
