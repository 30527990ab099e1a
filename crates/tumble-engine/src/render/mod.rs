//! Frame renderer.
//!
//! Owns the linked program, the uploaded meshes and the cached projection,
//! and turns accumulated scene time into one frame of draw calls.
//!
//! Convention:
//! - right-handed world, camera looking down -Z
//! - matrices uploaded column-major, GL clip-space depth in [-1, 1]

mod config;
mod error;
mod renderer;

pub use config::{MeshConfig, RendererConfig};
pub use error::RenderError;
pub use renderer::{FrameRenderer, FrameStats, Phase, SceneTime};
