//! Widget state models.
//!
//! DESIGN
//! ======
//! Each widget owns one small state struct here, kept free of DOM types so
//! toggle and validation behavior can be exercised under plain `cargo test`.
//! Components translate browser events into method calls on these models.

pub mod carousel;
pub mod counter;
pub mod effects;
pub mod form;
pub mod nav;
pub mod reveal;
