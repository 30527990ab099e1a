//! Static meshes: hard-coded position data and its GPU-resident upload.

mod buffer;
mod geometry;

pub use buffer::{MeshBuffer, UploadError};
pub use geometry::{MeshKind, Vertex, CUBE_VERTICES, PYRAMID_VERTICES};
