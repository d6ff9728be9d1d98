//! Page composition.

pub mod home;
