use bytemuck::{Pod, Zeroable};

/// Single vertex: position only, bound at attribute 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

const fn v(x: f32, y: f32, z: f32) -> Vertex {
    Vertex { position: [x, y, z] }
}

/// Unit cube (edge 2, centered on the origin): 12 triangles.
pub const CUBE_VERTICES: [Vertex; 36] = [
    // back
    v(-1.0, 1.0, -1.0), v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0), v(1.0, 1.0, -1.0), v(-1.0, 1.0, -1.0),
    // right
    v(1.0, -1.0, -1.0), v(1.0, -1.0, 1.0), v(1.0, 1.0, -1.0),
    v(1.0, -1.0, 1.0), v(1.0, 1.0, 1.0), v(1.0, 1.0, -1.0),
    // front
    v(1.0, -1.0, 1.0), v(-1.0, -1.0, 1.0), v(1.0, 1.0, 1.0),
    v(-1.0, -1.0, 1.0), v(-1.0, 1.0, 1.0), v(1.0, 1.0, 1.0),
    // left
    v(-1.0, -1.0, 1.0), v(-1.0, -1.0, -1.0), v(-1.0, 1.0, 1.0),
    v(-1.0, -1.0, -1.0), v(-1.0, 1.0, -1.0), v(-1.0, 1.0, 1.0),
    // bottom
    v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0), v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0),
    // top
    v(-1.0, 1.0, -1.0), v(1.0, 1.0, -1.0), v(1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0), v(-1.0, 1.0, 1.0), v(-1.0, 1.0, -1.0),
];

/// Square pyramid, apex at +Y: four sides plus a two-triangle base.
pub const PYRAMID_VERTICES: [Vertex; 18] = [
    // front
    v(-1.0, -1.0, 1.0), v(1.0, -1.0, 1.0), v(0.0, 1.0, 0.0),
    // right
    v(1.0, -1.0, 1.0), v(1.0, -1.0, -1.0), v(0.0, 1.0, 0.0),
    // back
    v(1.0, -1.0, -1.0), v(-1.0, -1.0, -1.0), v(0.0, 1.0, 0.0),
    // left
    v(-1.0, -1.0, -1.0), v(-1.0, -1.0, 1.0), v(0.0, 1.0, 0.0),
    // base
    v(-1.0, -1.0, -1.0), v(1.0, -1.0, 1.0), v(-1.0, -1.0, 1.0),
    v(1.0, -1.0, 1.0), v(-1.0, -1.0, -1.0), v(1.0, -1.0, -1.0),
];

/// The built-in meshes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MeshKind {
    Cube,
    Pyramid,
}

impl MeshKind {
    pub fn name(self) -> &'static str {
        match self {
            MeshKind::Cube => "cube",
            MeshKind::Pyramid => "pyramid",
        }
    }

    pub fn vertices(self) -> &'static [Vertex] {
        match self {
            MeshKind::Cube => &CUBE_VERTICES,
            MeshKind::Pyramid => &PYRAMID_VERTICES,
        }
    }

    pub fn vertex_count(self) -> usize {
        self.vertices().len()
    }

    pub fn triangle_count(self) -> usize {
        self.vertex_count() / 3
    }
}
