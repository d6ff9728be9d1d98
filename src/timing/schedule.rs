//! Cancelable one-shot task scheduling.
//!
//! The browser implementation defers to `setTimeout` via `gloo-timers`;
//! tests drive a [`ManualScheduler`] with a virtual clock so timing
//! behavior is deterministic under plain `cargo test`.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// A source of cancelable delayed callbacks.
///
/// Dropping the returned task cancels the callback if it has not fired yet.
/// Implementations are single-threaded; callbacks run on the same thread
/// that scheduled them.
pub trait Scheduler {
    /// Handle for a scheduled callback. Cancel by dropping.
    type Task;

    /// Run `f` once, `delay_ms` from now, unless the task is dropped first.
    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Self::Task;
}

/// `setTimeout`-backed scheduler for the browser.
///
/// `gloo_timers::callback::Timeout` clears the underlying timeout when
/// dropped, which is exactly the cancel-on-drop contract `Task` requires.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl Scheduler for BrowserScheduler {
    type Task = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, f: Box<dyn FnOnce()>) -> Self::Task {
        gloo_timers::callback::Timeout::new(delay_ms, f)
    }
}
