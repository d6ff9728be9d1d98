//! Navigation bar state: scroll styling, mobile menu, dropdowns.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Widths at or below this are treated as the mobile layout (px).
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Scroll offset past which the navbar gets its condensed styling (px).
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// State behind the navbar: condensed-on-scroll flag, hamburger menu, and
/// which dropdown (if any) is expanded in the mobile layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub open_dropdown: Option<usize>,
}

impl NavState {
    /// Update the condensed flag from the window's vertical scroll offset.
    pub fn set_scrolled(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Expand dropdown `index`, collapsing any other; tapping the open one
    /// collapses it. Only one dropdown is ever expanded.
    pub fn toggle_dropdown(&mut self, index: usize) {
        if self.open_dropdown == Some(index) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(index);
        }
    }

    /// Force-clear all mobile-only state. Run when the viewport resizes
    /// past [`MOBILE_BREAKPOINT`], so the desktop layout never shows a
    /// stale open menu.
    pub fn collapse_for_desktop(&mut self) {
        self.menu_open = false;
        self.open_dropdown = None;
    }
}

/// Whether `width` falls in the mobile layout range.
pub fn is_mobile(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}
