use std::fmt;
use std::path::{Path, PathBuf};

use crate::gl::{GraphicsApi, ShaderStage};

use super::error::BuildError;
use super::source::{ShaderSource, StageSource};

/// A successfully linked program object.
///
/// Not `Clone`: exactly one owner deletes it, via [`ProgramHandle::delete`].
pub struct ProgramHandle<G: GraphicsApi> {
    raw: G::Program,
}

impl<G: GraphicsApi> ProgramHandle<G> {
    pub fn raw(&self) -> G::Program {
        self.raw
    }

    /// Deletes the program object.
    pub fn delete(self, gl: &G) {
        gl.delete_program(self.raw);
    }
}

impl<G: GraphicsApi> fmt::Debug for ProgramHandle<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProgramHandle").field(&self.raw).finish()
    }
}

/// Builds the renderer's program from a vertex/fragment file pair.
#[derive(Debug, Clone)]
pub struct ShaderProgramBuilder {
    vertex_path: PathBuf,
    fragment_path: PathBuf,
}

impl ShaderProgramBuilder {
    pub fn new(vertex_path: impl Into<PathBuf>, fragment_path: impl Into<PathBuf>) -> Self {
        Self {
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
        }
    }

    pub fn vertex_path(&self) -> &Path {
        &self.vertex_path
    }

    pub fn fragment_path(&self) -> &Path {
        &self.fragment_path
    }

    /// Loads, compiles and links both stages.
    ///
    /// Unreadable files fall back to the built-in source for their stage.
    /// On failure every shader/program object created along the way has
    /// already been deleted.
    pub fn build<G: GraphicsApi>(&self, gl: &G) -> Result<ProgramHandle<G>, BuildError> {
        let source = ShaderSource::load(&self.vertex_path, &self.fragment_path);
        link_program(gl, &source)
    }
}

/// Compiles and links an in-memory source pair.
pub fn link_program<G: GraphicsApi>(
    gl: &G,
    source: &ShaderSource,
) -> Result<ProgramHandle<G>, BuildError> {
    let vertex = compile_stage(gl, &source.vertex)?;
    let fragment = match compile_stage(gl, &source.fragment) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(vertex);
            return Err(err);
        }
    };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(message) => {
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            log::error!("failed to create program object: {message}");
            return Err(BuildError::Create {
                object: "program",
                message,
            });
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    // The program keeps the linked code; stage objects are released on both paths.
    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if !gl.program_link_status(program) {
        let log = gl.program_info_log(program);
        log::error!("program log: {}", log.trim_end());
        gl.delete_program(program);
        return Err(BuildError::Link { log });
    }

    log::info!(
        "shader program linked (vertex: {:?}, fragment: {:?})",
        source.vertex.origin,
        source.fragment.origin
    );
    Ok(ProgramHandle { raw: program })
}

fn compile_stage<G: GraphicsApi>(gl: &G, source: &StageSource) -> Result<G::Shader, BuildError> {
    let stage: ShaderStage = source.stage;
    let shader = gl.create_shader(stage).map_err(|message| {
        log::error!("failed to create {stage} shader object: {message}");
        BuildError::Create {
            object: match stage {
                ShaderStage::Vertex => "vertex shader",
                ShaderStage::Fragment => "fragment shader",
            },
            message,
        }
    })?;

    gl.shader_source(shader, &source.text);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        log::error!("{stage} shader log: {}", log.trim_end());
        gl.delete_shader(shader);
        return Err(BuildError::Compile { stage, log });
    }

    Ok(shader)
}
