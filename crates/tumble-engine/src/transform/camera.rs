use glam::{Mat4, Vec3};

/// Static camera: translation only, looking down -Z.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
}

impl Camera {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 8.0))
    }
}
