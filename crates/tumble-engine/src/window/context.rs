use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::gl::GlowApi;
use crate::transform::Viewport;

use super::RuntimeConfig;

/// A window with a current OpenGL context and loaded entry points.
///
/// Field order is drop order: GL function table, then surface, then
/// context, then the window they were created for.
pub struct RenderWindow {
    gl: GlowApi,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl RenderWindow {
    /// Creates the window, a core-profile context of the configured version,
    /// makes it current on this thread and loads GL entry points.
    pub fn create(event_loop: &ActiveEventLoop, config: &RuntimeConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);

        let template = ConfigTemplateBuilder::new().with_depth_size(24);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, pick_config)
            .map_err(|e| anyhow!("failed to create window and GL config: {e}"))?;
        let window = window.context("GL display builder returned no window")?;

        let raw_window_handle = window
            .window_handle()
            .ok()
            .map(|handle| handle.as_raw());

        let display = gl_config.display();
        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(raw_window_handle);

        // SAFETY: the raw window handle belongs to `window`, which outlives the context.
        let not_current = unsafe { display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| anyhow!("failed to create OpenGL {major}.{minor} core context: {e}"))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| anyhow!("failed to build GL surface attributes: {e}"))?;

        // SAFETY: as above; the surface is dropped before the window.
        let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| anyhow!("failed to create GL window surface: {e}"))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| anyhow!("failed to make GL context current: {e}"))?;

        if config.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("unable to enable vsync: {e}");
            }
        }

        // SAFETY: `context` is current on this thread and, by field order,
        // outlives the function table loaded from it.
        let gl = unsafe { GlowApi::from_loader(|name| display.get_proc_address(name)) };

        log::info!(
            "OpenGL context ready: {} ({})",
            gl.version_string(),
            gl.renderer_string()
        );

        Ok(Self {
            gl,
            surface,
            context,
            window,
        })
    }

    pub fn gl(&self) -> &GlowApi {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Current drawable size in physical pixels.
    pub fn viewport(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height)
    }

    /// Resizes the GL surface. Zero-sized (minimized) windows are skipped.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.surface.resize(&self.context, width, height);
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| anyhow!("failed to swap buffers: {e}"))
    }
}

/// Prefers a config with at least a 24-bit depth buffer.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if best.depth_size() < 24 && candidate.depth_size() > best.depth_size() {
                candidate
            } else {
                best
            }
        })
        .expect("glutin offers at least one config matching the template")
}
