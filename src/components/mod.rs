//! Page section components.
//!
//! Each component owns its widget state and its event wiring; sections
//! share nothing except the navbar state context provided by `App`.

pub mod clients;
pub mod contact;
pub mod hero;
pub mod machines;
pub mod navbar;
pub mod reveal;
pub mod stats;
pub mod testimonials;
