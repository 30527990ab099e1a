use anyhow::Result;

use super::ctx::{FrameCtx, InitCtx};
use crate::gl::GlowApi;
use crate::transform::Viewport;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
///
/// Call order: `init` once, then `on_frame` once per displayed frame (with
/// `on_resize` between frames as needed), then `shutdown` exactly once
/// before the GL context is destroyed. `shutdown` is skipped if `init`
/// failed.
pub trait App {
    /// Called once, with the GL context current, before the first frame.
    ///
    /// An error aborts startup; the render loop is never entered.
    fn init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()>;

    /// Called once per displayed frame; buffers are swapped afterwards.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called when the drawable size changes.
    fn on_resize(&mut self, gl: &GlowApi, viewport: Viewport) {
        let _ = (gl, viewport);
    }

    /// Releases GPU resources. Called exactly once.
    fn shutdown(&mut self, gl: &GlowApi);
}
