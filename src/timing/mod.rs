//! Rate-limited event dispatch.
//!
//! DESIGN
//! ======
//! High-frequency DOM events (scroll, resize, pointer moves) must not run
//! their handlers on every event. The three wrappers here share one
//! primitive: a [`Scheduler`] that hands out cancelable task handles.
//! Widgets own their wrapper as a field, so pending work is canceled when
//! the widget is torn down rather than lingering as an orphaned timer.

pub mod debounce;
pub mod metronome;
pub mod schedule;
pub mod throttle;

pub use debounce::Debouncer;
pub use metronome::Metronome;
pub use schedule::Scheduler;
pub use throttle::Throttler;

#[cfg(feature = "csr")]
pub use schedule::BrowserScheduler;
