use crate::gl::{self, GraphicsApi};
use crate::mesh::MeshBuffer;
use crate::shader::{ProgramHandle, UniformBindings};
use crate::transform::{MeshPlacement, Projection, Viewport};

use super::config::RendererConfig;
use super::error::RenderError;

/// Lifecycle phase of a [`FrameRenderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Released,
}

/// Per-frame draw summary.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub draw_calls: u32,
    pub api_errors: u32,
}

/// Accumulated scene time, advanced only by [`FrameRenderer::update`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SceneTime {
    pub seconds: f64,
    pub frame_index: u64,
}

struct MeshSlot<G: GraphicsApi> {
    buffer: MeshBuffer<G>,
    placement: MeshPlacement,
    color: [f32; 4],
    instances: u32,
}

/// GPU-side state owned by a `Ready` renderer.
struct RendererState<G: GraphicsApi> {
    program: ProgramHandle<G>,
    uniforms: UniformBindings<G>,
    meshes: Vec<MeshSlot<G>>,
    projection: Projection,
    viewport: Viewport,
}

impl<G: GraphicsApi> RendererState<G> {
    fn release(self, gl: &G) {
        gl.use_program(None);
        gl.bind_vertex_array(None);
        gl.bind_array_buffer(None);
        for slot in self.meshes {
            slot.buffer.delete(gl);
        }
        self.program.delete(gl);
    }
}

enum Lifecycle<G: GraphicsApi> {
    Uninitialized,
    Ready(RendererState<G>),
    Released,
}

impl<G: GraphicsApi> Lifecycle<G> {
    fn phase(&self) -> Phase {
        match self {
            Lifecycle::Uninitialized => Phase::Uninitialized,
            Lifecycle::Ready(_) => Phase::Ready,
            Lifecycle::Released => Phase::Released,
        }
    }
}

/// Draws the configured meshes once per frame.
///
/// `Uninitialized → Ready → Released`. Only a `Ready` renderer touches the
/// graphics API in [`draw`](Self::draw); every other phase is rejected with
/// [`RenderError::NotReady`] before any call is issued.
pub struct FrameRenderer<G: GraphicsApi> {
    config: RendererConfig,
    lifecycle: Lifecycle<G>,
    time: SceneTime,
    render_enabled: bool,
}

impl<G: GraphicsApi> FrameRenderer<G> {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            lifecycle: Lifecycle::Uninitialized,
            time: SceneTime::default(),
            render_enabled: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn time(&self) -> SceneTime {
        self.time
    }

    pub fn render_enabled(&self) -> bool {
        self.render_enabled
    }

    pub fn set_render_enabled(&mut self, enabled: bool) {
        self.render_enabled = enabled;
    }

    /// Flips the render-enabled flag and returns the new value.
    pub fn toggle_render_enabled(&mut self) -> bool {
        self.render_enabled = !self.render_enabled;
        log::info!(
            "rendering {}",
            if self.render_enabled { "enabled" } else { "disabled" }
        );
        self.render_enabled
    }

    /// Takes ownership of `program`, uploads every configured mesh and
    /// resolves uniform locations, entering `Ready`.
    ///
    /// On failure nothing stays allocated: the program and any mesh uploaded
    /// so far are deleted before the error is returned.
    pub fn initialize(
        &mut self,
        gl: &G,
        program: ProgramHandle<G>,
        viewport: Viewport,
    ) -> Result<(), RenderError> {
        if !matches!(self.lifecycle, Lifecycle::Uninitialized) {
            program.delete(gl);
            return Err(RenderError::AlreadyInitialized(self.phase()));
        }

        let mut meshes: Vec<MeshSlot<G>> = Vec::with_capacity(self.config.meshes.len());
        for mesh in &self.config.meshes {
            match MeshBuffer::upload(gl, mesh.kind) {
                Ok(buffer) => meshes.push(MeshSlot {
                    buffer,
                    placement: mesh.placement,
                    color: mesh.color,
                    instances: mesh.instances.max(1),
                }),
                Err(err) => {
                    log::error!("{err}");
                    for slot in meshes {
                        slot.buffer.delete(gl);
                    }
                    program.delete(gl);
                    return Err(err.into());
                }
            }
        }

        let uniforms = UniformBindings::resolve(gl, &program, &self.config.uniforms);
        let projection = Projection::new(
            self.config.fov_y_degrees,
            viewport,
            self.config.near,
            self.config.far,
        );
        if viewport.is_valid() {
            gl.viewport(viewport.width as i32, viewport.height as i32);
        }

        log::info!(
            "renderer ready: {} mesh(es), viewport {}x{}",
            meshes.len(),
            viewport.width,
            viewport.height
        );

        self.lifecycle = Lifecycle::Ready(RendererState {
            program,
            uniforms,
            meshes,
            projection,
            viewport,
        });
        Ok(())
    }

    /// Applies a new drawable size: GL viewport plus cached projection.
    ///
    /// Ignored outside `Ready` and for zero-sized (minimized) windows.
    pub fn resize(&mut self, gl: &G, viewport: Viewport) {
        let Lifecycle::Ready(state) = &mut self.lifecycle else {
            return;
        };
        if !viewport.is_valid() || viewport == state.viewport {
            return;
        }
        state.viewport = viewport;
        gl.viewport(viewport.width as i32, viewport.height as i32);
        if state.projection.set_viewport(viewport) {
            log::debug!("projection rebuilt for aspect {:.3}", state.projection.aspect());
        }
    }

    /// Advances scene time by `dt` seconds and the frame counter by one.
    ///
    /// Negative or non-finite deltas are dropped so time stays monotonic.
    pub fn update(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.time.seconds += f64::from(dt);
        } else if dt != 0.0 {
            log::debug!("ignoring invalid frame delta {dt}");
        }
        self.time.frame_index = self.time.frame_index.wrapping_add(1);
    }

    /// Clears the frame and, when enabled, draws every mesh.
    pub fn draw(&mut self, gl: &G) -> Result<FrameStats, RenderError> {
        let Lifecycle::Ready(state) = &self.lifecycle else {
            return Err(RenderError::NotReady(self.phase()));
        };

        gl.clear(self.config.clear_color);

        let mut stats = FrameStats::default();
        if !self.render_enabled {
            stats.api_errors = gl::drain_errors(gl, "clear") as u32;
            return Ok(stats);
        }

        let SceneTime { seconds, frame_index } = self.time;
        let view = self.config.camera.view_matrix();
        let projection = state.projection.matrix().to_cols_array();

        gl.use_program(Some(state.program.raw()));
        gl.enable_depth_test();
        state.uniforms.upload_projection(gl, &projection);
        state.uniforms.upload_time_factor(gl, seconds as f32);

        for slot in &state.meshes {
            let model_view = view * slot.placement.model_matrix(seconds, frame_index);
            state.uniforms.upload_model_view(gl, &model_view.to_cols_array());
            state.uniforms.upload_color(gl, slot.color);

            slot.buffer.bind(gl);
            let count = slot.buffer.vertex_count();
            if slot.instances > 1 {
                gl.draw_triangles_instanced(0, count, slot.instances as i32);
            } else {
                gl.draw_triangles(0, count);
            }
            stats.draw_calls += 1;
        }

        stats.api_errors = gl::drain_errors(gl, "render") as u32;
        Ok(stats)
    }

    /// Deletes the program, vertex arrays and buffers, entering `Released`.
    ///
    /// Only valid once, from `Ready`; any other phase is rejected.
    pub fn release_resources(&mut self, gl: &G) -> Result<(), RenderError> {
        match std::mem::replace(&mut self.lifecycle, Lifecycle::Released) {
            Lifecycle::Ready(state) => {
                state.release(gl);
                log::info!("renderer resources released");
                Ok(())
            }
            other => {
                let phase = other.phase();
                self.lifecycle = other;
                Err(RenderError::NotReady(phase))
            }
        }
    }
}
