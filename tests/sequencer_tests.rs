// Host-side tests for the camera sequencer FSM and frame clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod clock {
    include!("../src/core/clock.rs");
}
mod sequencer {
    include!("../src/core/sequencer.rs");
}

use clock::FrameClock;
use sequencer::*;

fn config() -> SequencerConfig {
    SequencerConfig::default()
}

#[test]
fn trigger_fires_exactly_once() {
    let mut seq = CameraSequencer::new(config());
    assert_eq!(seq.state(), SequencerState::Idle);

    assert!(seq.trigger());
    assert_eq!(seq.state(), SequencerState::Intro);

    // A second gesture is a no-op in every later state.
    assert!(!seq.trigger());
    assert_eq!(seq.state(), SequencerState::Intro);
}

#[test]
fn idle_holds_the_intro_distance() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    for _ in 0..100 {
        let step = seq.advance(1.0 / 60.0);
        assert_eq!(step.eye.z, cfg.intro_z);
        assert_eq!(step.rotation_bias, 0.0);
        assert!(!step.intro_completed);
    }
    assert_eq!(seq.state(), SequencerState::Idle);
}

#[test]
fn intro_eases_monotonically_toward_base() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    seq.trigger();

    let mut prev = cfg.intro_z;
    let dt = cfg.intro_duration_sec / 64.0;
    for _ in 0..63 {
        let step = seq.advance(dt);
        assert!(step.eye.z <= prev, "camera moved away during intro");
        assert!(step.eye.z >= cfg.base_z && step.eye.z <= cfg.intro_z);
        prev = step.eye.z;
    }
}

#[test]
fn intro_completion_is_reported_exactly_once() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    seq.trigger();

    let step = seq.advance(cfg.intro_duration_sec);
    assert!(step.intro_completed);
    assert_eq!(step.eye.z, cfg.base_z);
    assert_eq!(seq.state(), SequencerState::Looping);

    for _ in 0..1000 {
        assert!(!seq.advance(1.0 / 60.0).intro_completed);
    }
    assert!(!seq.trigger());
}

#[test]
fn looping_yoyos_within_the_distance_band() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    seq.trigger();
    seq.advance(cfg.intro_duration_sec);

    let far = cfg.base_z + cfg.loop_span;
    let mut reached_far = false;
    let mut returned = false;
    for _ in 0..2000 {
        let z = seq.advance(1.0 / 60.0).eye.z;
        assert!(z >= cfg.base_z - 1e-4 && z <= far + 1e-4, "z={z}");
        if (z - far).abs() < 0.05 {
            reached_far = true;
        }
        if reached_far && (z - cfg.base_z).abs() < 0.05 {
            returned = true;
        }
    }
    assert!(reached_far, "loop never reached the far end");
    assert!(returned, "loop never came back");
    assert_eq!(seq.state(), SequencerState::Looping);
}

#[test]
fn looping_hits_the_exact_turnaround_points() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    seq.trigger();
    seq.advance(cfg.intro_duration_sec);

    let step = seq.advance(cfg.loop_period_sec * 0.5);
    assert!((step.eye.z - (cfg.base_z + cfg.loop_span)).abs() < 1e-4);
    let step = seq.advance(cfg.loop_period_sec * 0.5);
    assert!((step.eye.z - cfg.base_z).abs() < 1e-4);
}

#[test]
fn rotation_bias_ramps_after_the_intro() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    seq.trigger();
    let step = seq.advance(cfg.intro_duration_sec);
    // Ramp starts at zero on the completion step.
    assert_eq!(step.rotation_bias, 0.0);

    let step = seq.advance(cfg.bias_ramp_sec);
    assert!((step.rotation_bias - cfg.bias_target).abs() < 1e-5);

    // Settled: further advances hold the target.
    let step = seq.advance(10.0);
    assert!((step.rotation_bias - cfg.bias_target).abs() < 1e-5);
}

#[test]
fn camera_always_looks_at_the_origin() {
    let cfg = config();
    let mut seq = CameraSequencer::new(cfg.clone());
    assert_eq!(seq.advance(0.1).target, glam::Vec3::ZERO);
    seq.trigger();
    assert_eq!(seq.advance(0.1).target, glam::Vec3::ZERO);
    assert_eq!(seq.advance(0.1).eye.y, cfg.eye_y);
}

#[test]
fn easing_hits_its_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}

// ---------------- frame clock ----------------

#[test]
fn clock_accumulates_frame_deltas() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.elapsed_sec(), 0.0);
    clock.advance(0.25);
    clock.advance(0.25);
    assert_eq!(clock.elapsed_sec(), 0.5);
    assert_eq!(clock.elapsed_f32(), 0.5);
}

#[test]
fn clock_never_runs_backwards() {
    let mut clock = FrameClock::new();
    clock.advance(1.0);
    clock.advance(-5.0);
    assert_eq!(clock.elapsed_sec(), 1.0);
}
