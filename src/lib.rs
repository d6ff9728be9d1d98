//! # macchina-site
//!
//! Leptos + WASM interactivity layer for the Macchina marketing site.
//! Replaces the hand-written `script.js` DOM wiring with a Rust-native
//! component tree: navigation, scroll reveals, stat counters, the
//! testimonial carousel, decorative effects, and contact-form validation.
//!
//! Widget state is plain data in [`state`] so behavior is testable without
//! a browser; [`timing`] holds the debounce/throttle/metronome core that
//! rate-limits the high-frequency event handlers.

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;
pub mod state;
pub mod timing;

/// Client-side entry point: mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
