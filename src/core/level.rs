// Amplitude sample derivation from analyser frequency bins.

/// Map dBFS analyser bins to a [0, 1] average over the first `take` bins.
/// Returns 0.0 when no bins are available (audio not loaded yet).
pub fn amplitude_from_db_bins(bins: &[f32], take: usize) -> f32 {
    let take = take.min(bins.len());
    if take == 0 {
        return 0.0;
    }
    let mut sum = 0.0f32;
    for v in &bins[..take] {
        sum += ((v + 100.0) / 100.0).clamp(0.0, 1.0);
    }
    sum / take as f32
}

/// Exponential smoothing toward `target` with time constant `tau_sec`.
#[inline]
pub fn smooth_amplitude(prev: f32, target: f32, dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return target;
    }
    let alpha = 1.0 - (-dt_sec.max(0.0) / tau_sec).exp();
    prev + (target - prev) * alpha
}
