//! Graphics-API seam.
//!
//! Everything above this module talks to OpenGL through [`GraphicsApi`], a
//! narrow GL-shaped trait covering exactly the calls the shader pipeline and
//! the frame renderer issue. The production implementation is [`GlowApi`].
//!
//! All methods assume the GL context backing the implementation is current on
//! the calling thread.

mod native;

#[cfg(test)]
pub(crate) mod fake;

use std::fmt;
use std::hash::Hash;

pub use native::GlowApi;

/// Shader compilation unit kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// GL-style object API used by the pipeline.
///
/// Object handles are plain `Copy` names, mirroring GL: ownership is tracked
/// by the types that wrap them (`ProgramHandle`, `MeshBuffer`), not by the
/// handles themselves.
pub trait GraphicsApi {
    type Shader: Copy + Eq + Hash + fmt::Debug;
    type Program: Copy + Eq + Hash + fmt::Debug;
    type Buffer: Copy + Eq + Hash + fmt::Debug;
    type VertexArray: Copy + Eq + Hash + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;

    // Shaders
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // Programs
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // Uniforms
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    /// Uploads a column-major 4x4 matrix.
    fn uniform_mat4(&self, location: &Self::UniformLocation, value: &[f32; 16]);
    fn uniform_vec4(&self, location: &Self::UniformLocation, value: [f32; 4]);
    fn uniform_f32(&self, location: &Self::UniformLocation, value: f32);

    // Vertex storage
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the bound array buffer with static-draw usage.
    fn array_buffer_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);
    /// Describes attribute `index` as tightly packed `vec3<f32>` from the
    /// bound array buffer and enables it.
    fn vertex_attrib_vec3(&self, index: u32);

    // Frame state and drawing
    fn viewport(&self, width: i32, height: i32);
    /// Clears color and depth targets, color to `color`.
    fn clear(&self, color: [f32; 4]);
    /// Enables depth testing with a less-or-equal comparison.
    fn enable_depth_test(&self);
    fn draw_triangles(&self, first: i32, count: i32);
    fn draw_triangles_instanced(&self, first: i32, count: i32, instances: i32);

    /// Pops one pending error code, `None` once the queue is empty.
    fn get_error(&self) -> Option<u32>;
}

/// Symbolic name for a GL error code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        0x0500 => "GL_INVALID_ENUM",
        0x0501 => "GL_INVALID_VALUE",
        0x0502 => "GL_INVALID_OPERATION",
        0x0503 => "GL_STACK_OVERFLOW",
        0x0504 => "GL_STACK_UNDERFLOW",
        0x0505 => "GL_OUT_OF_MEMORY",
        0x0506 => "GL_INVALID_FRAMEBUFFER_OPERATION",
        0x0507 => "GL_CONTEXT_LOST",
        _ => "unknown GL error",
    }
}

/// Upper bound on error codes drained per call. A lost context reports
/// `GL_CONTEXT_LOST` forever.
const MAX_DRAINED_ERRORS: usize = 32;

/// Drains the API error queue, logging each code. Returns the number drained.
pub fn drain_errors<G: GraphicsApi + ?Sized>(gl: &G, during: &str) -> usize {
    let mut drained = 0;
    while drained < MAX_DRAINED_ERRORS {
        let Some(code) = gl.get_error() else { break };
        log::warn!("OpenGL error in {during}: {} (0x{code:04X})", error_name(code));
        drained += 1;
    }
    drained
}
