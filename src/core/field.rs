// Instance transform generator for the torus field.
//
// Everything here is pure arithmetic over the inputs: instance index,
// instance count, elapsed time, the current amplitude sample and the shared
// parameter record. No hidden state, no failure path. The web frontend calls
// `write_instances` once per frame and uploads the result verbatim.

use glam::{Mat4, Quat, Vec3};

/// Radians of Y rotation accumulated per unit of phase.
pub const ROTATION_RATE: f32 = 2.0 * std::f32::consts::PI * (std::f32::consts::PI / 180.0);

/// How much the unwrapped phase stretches an instance vertically.
pub const SCALE_Y_COEFF: f32 = 0.05;

/// Mutable animation parameters shared between the panel / sequencer
/// (writers) and the generator (reader). All access is single-threaded and
/// read-after-write within one frame, so no locking is involved.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Shader distortion strength, 0..=5.
    pub distortion_power: f32,
    /// Per-pair Y offset magnitude in world units.
    pub position_bias: f32,
    /// Amplitude influence on the position offset, 0..=2.
    pub volume_scale: f32,
    /// Sequencer-driven mesh rotation bias in radians.
    pub rotation_bias: f32,
    /// Index into the background palette cycled by the panel.
    pub background_index: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            distortion_power: 1.0,
            position_bias: 0.12,
            volume_scale: 1.0,
            rotation_bias: 0.0,
            background_index: 0,
        }
    }
}

/// Cyclically wrap `value` into the half-open range `[min, max)`.
///
/// A value exceeding the range re-enters from the opposite bound; this is a
/// true modular wrap, never a clamp. `wrap(0.5, n + 0.5, n + 0.5) == 0.5`.
#[inline]
pub fn wrap(min: f32, max: f32, value: f32) -> f32 {
    let span = max - min;
    min + (value - min).rem_euclid(span)
}

/// +1 for even indices, -1 for odd indices.
#[inline]
pub fn parity_sign(index: usize) -> f32 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Even index of the pair `index` belongs to. Adjacent indices (2k, 2k+1)
/// share this base, so they coincide visually and differ only by parity sign.
/// An odd instance count leaves the last index unpaired; that is deliberate.
#[inline]
pub fn pair_base(index: usize) -> usize {
    index - (index % 2)
}

/// One instance's decomposed transform plus its scalar attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: Vec3,
    /// Normalized phase in [0, 1).
    pub progress: f32,
    pub alpha: f32,
    /// Per-instance distortion amount fed to the shader.
    pub distortion: f32,
}

impl InstanceTransform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }
}

/// Compute the transform and attributes for instance `index` of `count` at
/// elapsed time `elapsed`, perturbed by the current `amplitude` sample.
pub fn instance_transform(
    index: usize,
    count: usize,
    elapsed: f32,
    amplitude: f32,
    params: &FieldParams,
) -> InstanceTransform {
    let n = count as f32;
    let sign = parity_sign(index);

    let phase = wrap(0.5, n + 0.5, pair_base(index) as f32 + elapsed);
    let norm = (phase - 0.5) / n;

    // Instances further along their cycle are perturbed less by amplitude.
    let offset_y = sign * (params.position_bias + amplitude * params.volume_scale * (1.0 - norm));

    let rotation_y = sign * ROTATION_RATE * elapsed + params.rotation_bias;

    // Scale follows the unwrapped phase: a grow-and-reset pulse as it wraps.
    let scale = Vec3::new(phase, 1.0 + phase * SCALE_Y_COEFF, phase);

    InstanceTransform {
        position: Vec3::new(0.0, offset_y, 0.0),
        rotation_y,
        scale,
        progress: norm,
        alpha: 1.0 - norm,
        distortion: params.distortion_power * (1.0 - norm),
    }
}

/// GPU-side instance layout: a column-major model matrix plus a packed
/// attribute vector `[progress, alpha, distortion, 0]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub misc: [f32; 4],
}

impl From<&InstanceTransform> for InstanceRaw {
    fn from(t: &InstanceTransform) -> Self {
        Self {
            model: t.matrix().to_cols_array_2d(),
            misc: [t.progress, t.alpha, t.distortion, 0.0],
        }
    }
}

/// Recompute every instance from scratch into `out`. The slice length is the
/// instance count, fixed at construction and never resized mid-session.
pub fn write_instances(out: &mut [InstanceRaw], elapsed: f32, amplitude: f32, params: &FieldParams) {
    let count = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        let t = instance_transform(i, count, elapsed, amplitude, params);
        *slot = InstanceRaw::from(&t);
    }
}
