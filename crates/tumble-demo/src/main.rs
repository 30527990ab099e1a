use std::path::PathBuf;

use anyhow::{Context, Result};

use tumble_engine::core::{App, AppControl, FrameCtx, InitCtx};
use tumble_engine::gl::GlowApi;
use tumble_engine::input::Key;
use tumble_engine::logging::{init_logging, LoggingConfig};
use tumble_engine::render::{FrameRenderer, RendererConfig};
use tumble_engine::shader::ShaderProgramBuilder;
use tumble_engine::transform::Viewport;
use tumble_engine::window::{Runtime, RuntimeConfig};

const DEFAULT_VERTEX_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/vertShader.glsl");
const DEFAULT_FRAGMENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/fragShader.glsl");

struct TumbleDemo {
    shaders: ShaderProgramBuilder,
    renderer: FrameRenderer<GlowApi>,
}

impl TumbleDemo {
    fn new(shaders: ShaderProgramBuilder) -> Self {
        Self {
            shaders,
            renderer: FrameRenderer::new(RendererConfig::default()),
        }
    }
}

impl App for TumbleDemo {
    fn init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()> {
        let program = self.shaders.build(ctx.gl).with_context(|| {
            format!(
                "failed to build shader program from {} and {}",
                self.shaders.vertex_path().display(),
                self.shaders.fragment_path().display()
            )
        })?;

        self.renderer
            .initialize(ctx.gl, program, ctx.viewport)
            .context("failed to initialize renderer")?;

        log::info!("press Q to toggle rendering, Escape to quit");
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input.pressed(Key::Escape) {
            return AppControl::Exit;
        }
        for _ in 0..ctx.input.presses(Key::Q) {
            self.renderer.toggle_render_enabled();
        }

        self.renderer.update(ctx.time.dt);
        if let Err(e) = self.renderer.draw(ctx.gl) {
            log::error!("draw failed: {e}");
            return AppControl::Exit;
        }

        AppControl::Continue
    }

    fn on_resize(&mut self, gl: &GlowApi, viewport: Viewport) {
        self.renderer.resize(gl, viewport);
    }

    fn shutdown(&mut self, gl: &GlowApi) {
        if let Err(e) = self.renderer.release_resources(gl) {
            log::warn!("release skipped: {e}");
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args_os().skip(1);
    let vertex_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VERTEX_PATH));
    let fragment_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FRAGMENT_PATH));

    log::info!(
        "shaders: vertex {}, fragment {}",
        vertex_path.display(),
        fragment_path.display()
    );

    let app = TumbleDemo::new(ShaderProgramBuilder::new(vertex_path, fragment_path));
    Runtime::run(RuntimeConfig::default(), app)
}
