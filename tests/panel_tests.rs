// Host-side tests for the parameter panel key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod field {
    include!("../src/core/field.rs");
}
mod panel {
    include!("../src/core/panel.rs");
}

use field::FieldParams;
use panel::*;

#[test]
fn arrow_keys_map_to_parameter_edits() {
    assert_eq!(action_for_key("ArrowUp"), Some(PanelAction::DistortionUp));
    assert_eq!(action_for_key("ArrowDown"), Some(PanelAction::DistortionDown));
    assert_eq!(action_for_key("ArrowRight"), Some(PanelAction::VolumeUp));
    assert_eq!(action_for_key("ArrowLeft"), Some(PanelAction::VolumeDown));
    assert_eq!(action_for_key("b"), Some(PanelAction::CycleBackground));
    assert_eq!(action_for_key("B"), Some(PanelAction::CycleBackground));
    assert_eq!(action_for_key("0"), Some(PanelAction::Reset));
}

#[test]
fn unbound_keys_do_nothing() {
    for key in ["a", "Enter", "Escape", " ", "1", "arrowup"] {
        assert_eq!(action_for_key(key), None, "{key:?} should be unbound");
    }
}

#[test]
fn distortion_clamps_at_both_ends() {
    let mut p = FieldParams::default();
    for _ in 0..100 {
        apply_action(&mut p, PanelAction::DistortionUp);
    }
    assert_eq!(p.distortion_power, DISTORTION_MAX);
    for _ in 0..100 {
        apply_action(&mut p, PanelAction::DistortionDown);
    }
    assert_eq!(p.distortion_power, DISTORTION_MIN);
}

#[test]
fn volume_clamps_at_both_ends() {
    let mut p = FieldParams::default();
    for _ in 0..100 {
        apply_action(&mut p, PanelAction::VolumeUp);
    }
    assert_eq!(p.volume_scale, VOLUME_MAX);
    for _ in 0..100 {
        apply_action(&mut p, PanelAction::VolumeDown);
    }
    assert_eq!(p.volume_scale, VOLUME_MIN);
}

#[test]
fn edits_leave_unrelated_parameters_alone() {
    let mut p = FieldParams::default();
    let bias = p.position_bias;
    apply_action(&mut p, PanelAction::DistortionUp);
    apply_action(&mut p, PanelAction::VolumeDown);
    assert_eq!(p.position_bias, bias);
    assert_eq!(p.background_index, 0);
}

#[test]
fn background_cycle_wraps_around_the_palette() {
    let mut p = FieldParams::default();
    for i in 1..=BACKGROUND_PALETTE.len() {
        apply_action(&mut p, PanelAction::CycleBackground);
        assert_eq!(p.background_index, i % BACKGROUND_PALETTE.len());
    }
    assert_eq!(p.background_index, 0);
}

#[test]
fn background_color_never_indexes_out_of_bounds() {
    for i in 0..3 * BACKGROUND_PALETTE.len() {
        let c = background_color(i);
        assert!(BACKGROUND_PALETTE.contains(&c));
    }
}

#[test]
fn reset_restores_defaults_but_keeps_the_sequencer_bias() {
    let mut p = FieldParams::default();
    apply_action(&mut p, PanelAction::DistortionUp);
    apply_action(&mut p, PanelAction::VolumeUp);
    apply_action(&mut p, PanelAction::CycleBackground);
    p.rotation_bias = 0.6;

    apply_action(&mut p, PanelAction::Reset);
    let d = FieldParams::default();
    assert_eq!(p.distortion_power, d.distortion_power);
    assert_eq!(p.volume_scale, d.volume_scale);
    assert_eq!(p.background_index, d.background_index);
    assert_eq!(p.rotation_bias, 0.6);
}
