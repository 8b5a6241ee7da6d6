/// Scene and audio tuning constants.
///
/// These express intended behavior (sizes, smoothing time constants, clamp
/// limits) and keep magic numbers out of the code.
// Instanced field size, fixed at construction and never changed mid-session.
pub const INSTANCE_COUNT: usize = 40;

// Torus geometry (ring in the XZ plane)
pub const TORUS_MAJOR_RADIUS: f32 = 5.0;
pub const TORUS_TUBE_RADIUS: f32 = 0.1;
pub const TORUS_RADIAL_SEGMENTS: usize = 8;
pub const TORUS_TUBULAR_SEGMENTS: usize = 90;

// Audio analysis
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const ANALYSER_TAKE_BINS: usize = 16;
pub const AMPLITUDE_TAU_SEC: f32 = 0.12;
pub const MASTER_GAIN: f32 = 0.8;

// Looped music asset fetched after the intro completes.
pub const AUDIO_ASSET_URL: &str = "assets/loop.mp3";
