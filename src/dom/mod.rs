//! Browser glue.
//!
//! Thin wrappers over `web-sys` used by the components. Everything here
//! degrades to a no-op (or a zero) outside the browser, so components can
//! call these helpers unconditionally.

pub mod observer;
pub mod raf;
pub mod scroll;
pub mod viewport;
