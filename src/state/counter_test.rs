use super::*;

// =============================================================
// Stepping
// =============================================================

#[test]
fn reaches_target_exactly() {
    let mut counter = CounterAnimation::new(500.0);
    let mut frames = 0;
    while counter.step() {
        frames += 1;
        assert!(frames < 10_000, "counter failed to converge");
    }
    assert!(counter.done());
    assert_eq!(counter.display(), 500);
}

#[test]
fn display_is_monotonic() {
    let mut counter = CounterAnimation::new(1250.0);
    let mut last = counter.display();
    while counter.step() {
        let now = counter.display();
        assert!(now >= last);
        last = now;
    }
    assert_eq!(counter.display(), 1250);
}

#[test]
fn ceil_keeps_small_targets_moving() {
    // target / 200 is fractional; without the ceil the counter would creep
    // by sub-integer amounts and render as stuck.
    let mut counter = CounterAnimation::new(25.0);
    assert!(counter.step() || counter.done());
    assert!(counter.display() >= 1);
}

#[test]
fn never_overshoots_target() {
    let mut counter = CounterAnimation::new(37.0);
    while counter.step() {
        assert!(counter.display() <= 37);
    }
    assert_eq!(counter.display(), 37);
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn display_tracks_ceiled_frames_exactly() {
    // each frame ceils, so the shown value is never below the frame count
    let mut counter = CounterAnimation::new(333.0);
    let mut frames = 0;
    while counter.step() {
        frames += 1;
        assert!(counter.display() >= frames);
    }
    assert_eq!(counter.display(), 333);
}

#[test]
fn zero_target_is_immediately_done() {
    let mut counter = CounterAnimation::new(0.0);
    assert!(counter.done());
    assert!(!counter.step());
    assert_eq!(counter.display(), 0);
}

#[test]
fn large_target_takes_about_two_hundred_frames() {
    let mut counter = CounterAnimation::new(1_000_000.0);
    let mut frames = 0;
    while counter.step() {
        frames += 1;
    }
    // ceil() shaves a frame or two off the nominal 200.
    assert!((150..=200).contains(&frames), "took {frames} frames");
}
