// Camera animation sequencer.
//
// An explicit finite-state machine (Idle -> Intro -> Looping) with guarded
// transitions, independent of any event-listener lifecycle. The intro eases
// the camera in once; the loop then oscillates camera distance forever
// (yoyo). Intro completion also starts a rotation-bias ramp whose value is
// reported every step so the generator can pick it up.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Intro,
    Looping,
}

/// Timing and distance tuning for the sequence.
#[derive(Clone, Debug)]
pub struct SequencerConfig {
    /// Camera Z before and during the start of the intro.
    pub intro_z: f32,
    /// Camera Z the intro settles at; the loop oscillates above it.
    pub base_z: f32,
    /// Camera height, constant through the whole sequence.
    pub eye_y: f32,
    pub intro_duration_sec: f32,
    /// Peak distance added to `base_z` at the far end of the yoyo.
    pub loop_span: f32,
    /// Full out-and-back period of the yoyo oscillation.
    pub loop_period_sec: f32,
    /// Rotation bias the post-intro ramp settles at, in radians.
    pub bias_target: f32,
    pub bias_ramp_sec: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            intro_z: 30.0,
            base_z: 10.0,
            eye_y: 1.0,
            intro_duration_sec: 4.0,
            loop_span: 2.0,
            loop_period_sec: 6.0,
            bias_target: 0.6,
            bias_ramp_sec: 3.0,
        }
    }
}

/// Per-frame output of the sequencer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequencerStep {
    pub eye: Vec3,
    pub target: Vec3,
    pub rotation_bias: f32,
    /// True on exactly the step in which the intro finished.
    pub intro_completed: bool,
}

pub struct CameraSequencer {
    config: SequencerConfig,
    state: SequencerState,
    state_time: f32,
    bias_time: f32,
}

impl CameraSequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self {
            config,
            state: SequencerState::Idle,
            state_time: 0.0,
            bias_time: 0.0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Fire the one-time gesture. Returns whether the Idle -> Intro
    /// transition actually happened; repeat triggers are no-ops.
    pub fn trigger(&mut self) -> bool {
        if self.state == SequencerState::Idle {
            self.state = SequencerState::Intro;
            self.state_time = 0.0;
            true
        } else {
            false
        }
    }

    /// Advance the sequence by `dt_sec` and report the camera pose and
    /// rotation bias for this frame.
    pub fn advance(&mut self, dt_sec: f32) -> SequencerStep {
        let dt = dt_sec.max(0.0);
        let mut intro_completed = false;

        let z = match self.state {
            SequencerState::Idle => self.config.intro_z,
            SequencerState::Intro => {
                self.state_time += dt;
                let u = (self.state_time / self.config.intro_duration_sec).clamp(0.0, 1.0);
                if u >= 1.0 {
                    self.state = SequencerState::Looping;
                    self.state_time = 0.0;
                    intro_completed = true;
                    self.config.base_z
                } else {
                    lerp(self.config.intro_z, self.config.base_z, ease_out_cubic(u))
                }
            }
            SequencerState::Looping => {
                self.state_time += dt;
                self.bias_time += dt;
                let half = self.config.loop_period_sec * 0.5;
                // Yoyo: 0..1..0 over one full period, eased both ways.
                let cycle = (self.state_time / half).rem_euclid(2.0);
                let toward = if cycle < 1.0 { cycle } else { 2.0 - cycle };
                self.config.base_z + self.config.loop_span * ease_in_out_quad(toward)
            }
        };

        SequencerStep {
            eye: Vec3::new(0.0, self.config.eye_y, z),
            target: Vec3::ZERO,
            rotation_bias: self.rotation_bias(),
            intro_completed,
        }
    }

    fn rotation_bias(&self) -> f32 {
        if self.state != SequencerState::Looping {
            return 0.0;
        }
        let u = (self.bias_time / self.config.bias_ramp_sec).clamp(0.0, 1.0);
        self.config.bias_target * ease_out_cubic(u)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, u: f32) -> f32 {
    a + (b - a) * u
}

#[inline]
pub fn ease_out_cubic(u: f32) -> f32 {
    let inv = 1.0 - u.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[inline]
pub fn ease_in_out_quad(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    if u < 0.5 {
        2.0 * u * u
    } else {
        1.0 - 2.0 * (1.0 - u) * (1.0 - u)
    }
}
