//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop, the window and its OpenGL context, and drives
//! an [`App`](crate::core::App) through init, frames and shutdown.

mod context;
mod runtime;

pub use context::RenderWindow;
pub use runtime::{Runtime, RuntimeConfig};
