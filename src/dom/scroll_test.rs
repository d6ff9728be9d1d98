use super::*;

// =============================================================
// Landing position
// =============================================================

#[test]
fn anchor_lands_below_fixed_bar() {
    assert!((anchor_top(400.0, 72.0) - 328.0).abs() < f64::EPSILON);
}

#[test]
fn zero_bar_height_keeps_element_top() {
    assert!((anchor_top(250.0, 0.0) - 250.0).abs() < f64::EPSILON);
}
