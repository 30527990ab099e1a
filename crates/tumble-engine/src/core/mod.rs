//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (window, GL context, event
//! loop) and the application that owns the renderer.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, InitCtx};
