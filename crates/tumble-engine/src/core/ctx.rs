use crate::gl::GlowApi;
use crate::input::InputFrame;
use crate::time::FrameTime;
use crate::transform::Viewport;

/// Context passed to [`App::init`](super::App::init).
pub struct InitCtx<'a> {
    pub gl: &'a GlowApi,
    pub viewport: Viewport,
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    pub gl: &'a GlowApi,
    pub input: &'a InputFrame,
    pub time: FrameTime,
    pub viewport: Viewport,
}
