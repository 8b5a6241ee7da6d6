// Parameter panel bindings: key -> action -> clamped parameter edit.
//
// The mapping lives here (pure, host-testable) so the keydown wiring in
// `events` stays a thin shell around it.

use super::field::FieldParams;

pub const DISTORTION_MIN: f32 = 0.0;
pub const DISTORTION_MAX: f32 = 5.0;
pub const DISTORTION_STEP: f32 = 0.25;

pub const VOLUME_MIN: f32 = 0.0;
pub const VOLUME_MAX: f32 = 2.0;
pub const VOLUME_STEP: f32 = 0.1;

/// Clear colors the panel cycles through, dark first.
pub const BACKGROUND_PALETTE: [[f64; 3]; 4] = [
    [0.07, 0.07, 0.07],
    [0.03, 0.04, 0.08],
    [0.08, 0.03, 0.06],
    [0.02, 0.06, 0.05],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    DistortionUp,
    DistortionDown,
    VolumeUp,
    VolumeDown,
    CycleBackground,
    Reset,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<PanelAction> {
    match key {
        "ArrowUp" => Some(PanelAction::DistortionUp),
        "ArrowDown" => Some(PanelAction::DistortionDown),
        "ArrowRight" => Some(PanelAction::VolumeUp),
        "ArrowLeft" => Some(PanelAction::VolumeDown),
        "b" | "B" => Some(PanelAction::CycleBackground),
        "0" => Some(PanelAction::Reset),
        _ => None,
    }
}

pub fn apply_action(params: &mut FieldParams, action: PanelAction) {
    match action {
        PanelAction::DistortionUp => {
            params.distortion_power =
                (params.distortion_power + DISTORTION_STEP).clamp(DISTORTION_MIN, DISTORTION_MAX);
        }
        PanelAction::DistortionDown => {
            params.distortion_power =
                (params.distortion_power - DISTORTION_STEP).clamp(DISTORTION_MIN, DISTORTION_MAX);
        }
        PanelAction::VolumeUp => {
            params.volume_scale =
                (params.volume_scale + VOLUME_STEP).clamp(VOLUME_MIN, VOLUME_MAX);
        }
        PanelAction::VolumeDown => {
            params.volume_scale =
                (params.volume_scale - VOLUME_STEP).clamp(VOLUME_MIN, VOLUME_MAX);
        }
        PanelAction::CycleBackground => {
            params.background_index = (params.background_index + 1) % BACKGROUND_PALETTE.len();
        }
        PanelAction::Reset => {
            let bias = params.rotation_bias;
            *params = FieldParams::default();
            // The sequencer owns the bias; resetting knobs must not undo it.
            params.rotation_bias = bias;
        }
    }
}

#[inline]
pub fn background_color(index: usize) -> [f64; 3] {
    BACKGROUND_PALETTE[index % BACKGROUND_PALETTE.len()]
}
