use std::fmt;

use crate::gl::GraphicsApi;

use super::geometry::MeshKind;

/// Position attribute slot used by every shader in this crate.
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Mesh upload failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadError {
    pub mesh: &'static str,
    pub message: String,
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to upload {} mesh: {}", self.mesh, self.message)
    }
}

impl std::error::Error for UploadError {}

/// A mesh resident in GPU memory: one vertex array + one vertex buffer.
///
/// Created once at startup; deleted exactly once by [`MeshBuffer::delete`].
pub struct MeshBuffer<G: GraphicsApi> {
    kind: MeshKind,
    vertex_array: G::VertexArray,
    buffer: G::Buffer,
    vertex_count: i32,
}

impl<G: GraphicsApi> MeshBuffer<G> {
    /// Uploads the vertices of `kind` with static usage and records the
    /// attribute layout in a fresh vertex array.
    pub fn upload(gl: &G, kind: MeshKind) -> Result<Self, UploadError> {
        let err = |message: String| UploadError {
            mesh: kind.name(),
            message,
        };

        let vertex_array = gl.create_vertex_array().map_err(err)?;
        let buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(message) => {
                gl.delete_vertex_array(vertex_array);
                return Err(err(message));
            }
        };

        let vertices = kind.vertices();
        gl.bind_vertex_array(Some(vertex_array));
        gl.bind_array_buffer(Some(buffer));
        gl.array_buffer_data(bytemuck::cast_slice(vertices));
        gl.vertex_attrib_vec3(POSITION_ATTRIBUTE);
        gl.bind_vertex_array(None);
        gl.bind_array_buffer(None);

        log::debug!(
            "uploaded {} mesh: {} vertices ({} bytes)",
            kind.name(),
            vertices.len(),
            std::mem::size_of_val(vertices)
        );

        Ok(Self {
            kind,
            vertex_array,
            buffer,
            vertex_count: vertices.len() as i32,
        })
    }

    pub fn kind(&self) -> MeshKind {
        self.kind
    }

    pub fn vertex_count(&self) -> i32 {
        self.vertex_count
    }

    pub fn buffer(&self) -> G::Buffer {
        self.buffer
    }

    /// Binds the vertex array and its buffer for drawing.
    pub fn bind(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.vertex_array));
        gl.bind_array_buffer(Some(self.buffer));
    }

    pub fn delete(self, gl: &G) {
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.buffer);
    }
}
