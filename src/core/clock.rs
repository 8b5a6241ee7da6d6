/// Monotonic elapsed-time source, advanced once per rendered frame.
///
/// The platform glue measures wall-clock deltas; this type only accumulates
/// them, rejecting negative steps so elapsed time never runs backwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt_sec: f64) {
        self.elapsed += dt_sec.max(0.0);
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_f32(&self) -> f32 {
        self.elapsed as f32
    }
}
