use super::*;

// =============================================================
// Single-active invariant
// =============================================================

#[test]
fn starts_on_first_slide() {
    let state = CarouselState::new(3);
    assert_eq!(state.active(), 0);
    assert_eq!(state.slide_count(), 3);
}

#[test]
fn advance_wraps_past_the_end() {
    let mut state = CarouselState::new(3);
    state.advance();
    assert_eq!(state.active(), 1);
    state.advance();
    assert_eq!(state.active(), 2);
    state.advance();
    assert_eq!(state.active(), 0);
}

#[test]
fn active_is_always_in_range() {
    let mut state = CarouselState::new(4);
    for _ in 0..17 {
        state.advance();
        assert!(state.active() < state.slide_count());
    }
}

// =============================================================
// Manual selection
// =============================================================

#[test]
fn select_jumps_to_index() {
    let mut state = CarouselState::new(5);
    state.select(3);
    assert_eq!(state.active(), 3);
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut state = CarouselState::new(3);
    state.select(1);
    state.select(7);
    assert_eq!(state.active(), 1);
}

#[test]
fn advance_continues_from_manual_selection() {
    let mut state = CarouselState::new(3);
    state.select(2);
    state.advance();
    assert_eq!(state.active(), 0);
}

// =============================================================
// Degenerate sizes
// =============================================================

#[test]
fn zero_len_is_clamped_to_one() {
    let mut state = CarouselState::new(0);
    assert_eq!(state.slide_count(), 1);
    state.advance();
    assert_eq!(state.active(), 0);
}

#[test]
fn single_slide_stays_active() {
    let mut state = CarouselState::new(1);
    state.advance();
    state.advance();
    assert_eq!(state.active(), 0);
}
