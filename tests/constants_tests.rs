// Host-side sanity checks on the scene tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_ranges_match_the_design() {
    assert_eq!(PARTICLE_COUNT, 1000);
    assert_eq!(LINE_COUNT, 50);
    // Shell spans [30, 50)
    assert_eq!(PARTICLE_RADIUS_MIN, 30.0);
    assert_eq!(PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN, 50.0);
    // Sizes span [0.5, 2.5)
    assert_eq!(PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN, 2.5);
    assert_eq!(LINE_EXTENT, 30.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_components_are_normalized() {
    for color in PALETTE {
        for c in color {
            assert!((0.0..=1.0).contains(&c));
        }
    }
    for c in LINE_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!((0.0..=1.0).contains(&LINE_OPACITY));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_probability_weights_are_valid() {
    assert!(CAMERA_SMOOTHING > 0.0 && CAMERA_SMOOTHING < 1.0);
    assert!(POINTER_PARALLAX_SCALE > 0.0);
    assert!(POINTER_DIVISOR > 0.0);
    assert!((0.0..=1.0).contains(&PULSE_PROBABILITY));
    assert!(PULSE_SCALE > 1.0);
    // A pulse always ends before the next roll
    assert!(PULSE_DURATION_TICKS < PULSE_INTERVAL_TICKS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive() {
    assert!(TYPEWRITER_DELAY_MS > 0);
    assert!(LISTEN_DURATION_MS > 0);
    assert!(CONFIRM_DISMISS_MS > 0);
    assert!(REVEAL_STAGGER_MS > 0);
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
}
