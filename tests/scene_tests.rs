// Host-side tests for the pure scene module.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn particles_lie_on_the_spherical_shell() {
    let field = generate_particles(&mut rng(), PARTICLE_COUNT);
    assert_eq!(field.len(), PARTICLE_COUNT);
    for pos in &field.positions {
        let r = pos.length();
        assert!(
            (PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN).contains(&r),
            "radius {r} out of range"
        );
    }
}

#[test]
fn particle_sizes_within_range() {
    let field = generate_particles(&mut rng(), PARTICLE_COUNT);
    for s in &field.sizes {
        assert!(
            (PARTICLE_SIZE_MIN..PARTICLE_SIZE_MIN + PARTICLE_SIZE_SPAN).contains(s),
            "size {s} out of range"
        );
    }
}

#[test]
fn particle_colors_come_from_the_palette_roughly_evenly() {
    let field = generate_particles(&mut rng(), PARTICLE_COUNT);
    let mut counts = [0usize; 3];
    for color in &field.colors {
        let idx = PALETTE
            .iter()
            .position(|p| p == color)
            .expect("color not in palette");
        counts[idx] += 1;
    }
    // 1000 draws at ~1/3 each; allow generous statistical slack
    for (i, &c) in counts.iter().enumerate() {
        assert!(
            (200..=470).contains(&c),
            "palette entry {i} drawn {c} times, expected near {}",
            PARTICLE_COUNT / 3
        );
    }
}

#[test]
fn line_endpoints_within_extent() {
    let lines = generate_lines(&mut rng(), LINE_COUNT);
    assert_eq!(lines.len(), LINE_COUNT);
    for line in &lines {
        for v in [line.a, line.b] {
            for c in v.to_array() {
                assert!(
                    (-LINE_EXTENT..LINE_EXTENT).contains(&c),
                    "endpoint coord {c} out of range"
                );
            }
        }
    }
}

#[test]
fn time_counter_strictly_increases() {
    let mut state = SceneState::new(LINE_COUNT);
    let mut rng = rng();
    let mut prev = state.time;
    for _ in 0..1000 {
        state.tick(PointerOffset::default(), &mut rng);
        assert!(state.time > prev);
        prev = state.time;
    }
}

#[test]
fn camera_converges_to_the_pointer_fixed_point() {
    let mut state = SceneState::new(0);
    let mut rng = rng();
    let pointer = PointerOffset { x: 8.0, y: -4.0 };
    for _ in 0..2000 {
        state.tick(pointer, &mut rng);
    }
    let target_x = pointer.x * POINTER_PARALLAX_SCALE;
    let target_y = -pointer.y * POINTER_PARALLAX_SCALE;
    assert!((state.camera.x - target_x).abs() < 1e-4);
    assert!((state.camera.y - target_y).abs() < 1e-4);
    assert_eq!(state.camera.z, CAMERA_Z);
}

#[test]
fn camera_fixed_point_is_idempotent() {
    let mut state = SceneState::new(0);
    let mut rng = rng();
    let pointer = PointerOffset { x: 8.0, y: -4.0 };
    state.camera.x = pointer.x * POINTER_PARALLAX_SCALE;
    state.camera.y = -pointer.y * POINTER_PARALLAX_SCALE;
    let before = state.camera;
    state.tick(pointer, &mut rng);
    assert!((state.camera.x - before.x).abs() < 1e-6);
    assert!((state.camera.y - before.y).abs() < 1e-6);
}

#[test]
fn pointer_offset_is_centered_and_scaled() {
    let offset = pointer_offset(900.0, 100.0, 1600.0, 800.0);
    assert_eq!(offset.x, 1.0);
    assert_eq!(offset.y, -3.0);

    let center = pointer_offset(800.0, 400.0, 1600.0, 800.0);
    assert_eq!(center, PointerOffset::default());
}

#[test]
fn aspect_matches_viewport_exactly() {
    assert_eq!(aspect(800, 600), 800.0 / 600.0);
    // degenerate height must not divide by zero
    assert!(aspect(800, 0).is_finite());
}

#[test]
fn line_spins_alternate_yaw_and_share_roll() {
    let mut state = SceneState::new(4);
    let mut rng = rng();
    state.tick(PointerOffset::default(), &mut rng);
    assert!(state.line_spins[0].yaw > 0.0);
    assert!(state.line_spins[1].yaw < 0.0);
    assert_eq!(state.line_spins[0].yaw, -state.line_spins[1].yaw);
    for spin in &state.line_spins {
        assert_eq!(spin.roll, LINE_ROLL_PER_TICK);
    }
}

#[test]
fn pulse_only_starts_on_interval_boundaries_and_expires() {
    let mut state = SceneState::new(0);
    let mut rng = rng();
    let mut activations = 0u32;
    let mut was_active = false;
    let mut activated_at = 0u64;

    // Enough boundaries that at least one pulse is a statistical certainty
    for _ in 0..(PULSE_INTERVAL_TICKS * 100) {
        state.tick(PointerOffset::default(), &mut rng);
        let active = matches!(state.pulse, Pulse::Active { .. });
        if active && !was_active {
            assert_eq!(
                state.time % PULSE_INTERVAL_TICKS,
                0,
                "pulse started off-boundary at {}",
                state.time
            );
            activations += 1;
            activated_at = state.time;
        }
        if was_active && !active {
            assert_eq!(state.time, activated_at + PULSE_DURATION_TICKS);
        }
        if active {
            assert_eq!(state.field_scale(), PULSE_SCALE);
        } else {
            assert_eq!(state.field_scale(), 1.0);
        }
        was_active = active;
    }
    assert!(activations > 0, "no pulse in 100 intervals");
}

#[test]
fn field_model_is_identity_before_any_tick() {
    let state = SceneState::new(0);
    let m = state.field_model();
    assert!(m.abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
}

#[test]
fn rotated_endpoints_preserve_length() {
    let mut state = SceneState::new(LINE_COUNT);
    let mut rng = rng();
    let lines = generate_lines(&mut rng, LINE_COUNT);
    for _ in 0..500 {
        state.tick(PointerOffset::default(), &mut rng);
    }
    for (i, line) in lines.iter().enumerate() {
        let (a, b) = state.rotated_endpoints(line, i);
        let before = (line.b - line.a).length();
        let after = (b - a).length();
        assert!((before - after).abs() < 1e-3, "line {i} changed length");
    }
}
