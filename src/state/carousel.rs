//! Testimonial carousel index state.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Milliseconds between automatic slide advances.
pub const AUTO_ADVANCE_MS: u32 = 5000;

/// Active-slide tracker for a fixed list of slides.
///
/// Exactly one index is active at all times; the matching indicator dot
/// follows the same index, so the single-active invariant holds for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    active: usize,
}

impl CarouselState {
    /// A carousel over `len` slides, starting on the first.
    ///
    /// `len` of zero is clamped to one so the index math stays total; an
    /// empty carousel renders nothing anyway.
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Move to the next slide, wrapping past the end.
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.len;
    }

    /// Jump to `index`; out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }
}
