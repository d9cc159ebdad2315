pub mod camera;
pub mod city;
pub mod clock;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod gpu;
pub mod loading;
pub mod radio;
#[cfg(feature = "render")]
pub mod renderer;
pub mod scene;
pub mod scheduler;
pub mod transport;
pub mod tween;
pub mod voices;

pub use camera::*;
pub use city::*;
pub use clock::*;
pub use constants::*;
pub use cursor::*;
pub use error::*;
pub use gpu::*;
pub use loading::*;
pub use radio::*;
#[cfg(feature = "render")]
pub use renderer::*;
pub use scene::*;
pub use scheduler::*;
pub use transport::*;
pub use tween::*;
pub use voices::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
