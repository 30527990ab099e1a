//! Tumble engine crate.
//!
//! Shader-program build pipeline, mesh upload, per-frame transforms and the
//! frame renderer, plus the winit/glutin runtime that hosts them.

pub mod core;
pub mod gl;
pub mod input;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod shader;
pub mod time;
pub mod transform;
pub mod window;
