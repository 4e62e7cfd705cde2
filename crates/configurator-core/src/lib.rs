pub mod animator;
pub mod assets;
pub mod camera;
pub mod constants;
pub mod easing;
pub mod params;
pub mod picking;
pub mod rig;
pub mod scene;

pub use animator::*;
pub use assets::*;
pub use camera::*;
pub use constants::*;
pub use easing::*;
pub use params::*;
pub use picking::*;
pub use rig::*;
pub use scene::*;
