//! Scroll-reveal visibility geometry.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// How far into the viewport an element must reach before it reveals (px).
pub const REVEAL_MARGIN: f64 = 100.0;

/// Whether an element at the given viewport-relative bounds should reveal.
///
/// `top`/`bottom` come from the element's bounding rect: the element counts
/// as visible once its top clears [`REVEAL_MARGIN`] above the fold and its
/// bottom has not scrolled past the top edge. Revealing is a one-way latch
/// at the widget level; this predicate only answers "visible enough now".
pub fn is_revealed(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN && bottom > 0.0
}
