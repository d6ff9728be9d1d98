//! Stat counter animation stepping.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Number of animation frames a counter takes to reach its target.
pub const COUNTER_FRAMES: f64 = 200.0;

/// Frame-driven count-up toward a target value.
///
/// Each [`step`](Self::step) adds `target / 200` and rounds the displayed
/// value up, so small targets still visibly move and the final frame lands
/// exactly on the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            current: 0.0,
        }
    }

    /// Advance one frame. Returns `true` while another frame is needed.
    pub fn step(&mut self) -> bool {
        if self.current >= self.target {
            return false;
        }
        let increment = self.target / COUNTER_FRAMES;
        self.current = (self.current + increment).ceil().min(self.target);
        self.current < self.target
    }

    pub fn done(&self) -> bool {
        self.current >= self.target
    }

    /// Integral value to display for the current frame. `current` only ever
    /// holds ceiled values, so rounding is exact.
    #[allow(clippy::cast_possible_truncation)]
    pub fn display(&self) -> i64 {
        self.current.round() as i64
    }
}
