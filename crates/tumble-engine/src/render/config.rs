use glam::Vec3;

use crate::mesh::MeshKind;
use crate::shader::UniformNames;
use crate::transform::{Animation, Axis, Camera, MeshPlacement};

/// One mesh the renderer draws every frame.
#[derive(Debug, Clone)]
pub struct MeshConfig {
    pub kind: MeshKind,
    pub placement: MeshPlacement,
    /// Uploaded to the color uniform when the program has one.
    pub color: [f32; 4],
    /// Instances per draw; values above 1 use an instanced draw call.
    pub instances: u32,
}

impl MeshConfig {
    pub fn new(kind: MeshKind, position: Vec3) -> Self {
        Self {
            kind,
            placement: MeshPlacement::at(position),
            color: [1.0, 1.0, 1.0, 1.0],
            instances: 1,
        }
    }

    pub fn animation(mut self, animation: Animation) -> Self {
        self.placement.animation = animation;
        self
    }

    pub fn color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn instances(mut self, instances: u32) -> Self {
        self.instances = instances.max(1);
        self
    }
}

/// Scene and projection parameters for [`FrameRenderer`](super::FrameRenderer).
#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub camera: Camera,
    pub meshes: Vec<MeshConfig>,
    pub clear_color: [f32; 4],
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub uniforms: UniformNames,
}

impl Default for RendererConfig {
    /// Red cube below the origin, green pyramid up and to the right, camera
    /// eight units back. The cube is yawed and the pyramid tilted by negative
    /// angles (clockwise seen from +Y and +X respectively).
    fn default() -> Self {
        Self {
            camera: Camera::new(Vec3::new(0.0, 0.0, 8.0)),
            meshes: vec![
                MeshConfig::new(MeshKind::Cube, Vec3::new(0.0, -2.0, 0.0))
                    .animation(Animation::Fixed { axis: Axis::Y, degrees: -40.0 })
                    .color([1.0, 0.0, 0.0, 1.0]),
                MeshConfig::new(MeshKind::Pyramid, Vec3::new(2.0, 1.0, 1.0))
                    .animation(Animation::Fixed { axis: Axis::X, degrees: -30.0 })
                    .color([0.0, 1.0, 0.0, 1.0]),
            ],
            clear_color: [0.0, 0.0, 0.0, 1.0],
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            uniforms: UniformNames::default(),
        }
    }
}
