//! Pure math behind the decorative effects.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::state::nav::MOBILE_BREAKPOINT;

/// How long a ripple element stays in the tree before removal (ms).
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Hero background layer offset for a given scroll position: the layer
/// moves at half scroll speed.
pub fn parallax_shift(scroll_y: f64) -> f64 {
    scroll_y * 0.5
}

/// Hero overlay opacity, deepening as the page scrolls. The browser clamps
/// values above 1.0, matching the original behavior.
pub fn overlay_opacity(scroll_y: f64) -> f64 {
    0.5 + scroll_y * 0.001
}

/// Pointer position relative to an element, from client coordinates and
/// the element's bounding-rect origin. Used for both the click ripple and
/// the cursor-tracked glow.
pub fn pointer_offset(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> (f64, f64) {
    (client_x - rect_left, client_y - rect_top)
}

/// Hover lift applies only in the desktop layout.
pub fn lift_enabled(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT
}
