pub mod burst;
pub mod constants;
pub mod error;
pub mod field;
pub mod gesture;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod interaction;
pub mod landmarks;
pub mod morph;
pub mod palette;
pub mod render;
pub mod scene;
pub mod session;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use burst::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use gesture::*;
pub use interaction::*;
pub use landmarks::*;
pub use morph::*;
pub use palette::*;
pub use render::*;
pub use scene::*;
pub use session::*;
pub use state::*;
