pub mod clock;
pub mod field;
pub mod level;
pub mod mesh;
pub mod panel;
pub mod sequencer;

pub use clock::*;
pub use field::*;
pub use sequencer::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
