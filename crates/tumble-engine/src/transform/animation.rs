use glam::{Mat4, Vec3};

/// Principal rotation axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn rotation(self, radians: f32) -> Mat4 {
        match self {
            Axis::X => Mat4::from_rotation_x(radians),
            Axis::Y => Mat4::from_rotation_y(radians),
            Axis::Z => Mat4::from_rotation_z(radians),
        }
    }
}

/// Per-mesh rotation law.
#[derive(Debug, Copy, Clone)]
pub enum Animation {
    /// Constant orientation.
    Fixed { axis: Axis, degrees: f32 },
    /// Rotation driven by accumulated seconds.
    Spin { axis: Axis, radians_per_second: f32 },
    /// Rotation driven by the frame counter.
    FrameSpin { axis: Axis, radians_per_frame: f32 },
    /// Arbitrary rotation from `(seconds, frame_index)`; seconds narrowed to f32.
    Custom(fn(f32, u64) -> Mat4),
}

impl Animation {
    pub fn rotation(&self, seconds: f64, frame_index: u64) -> Mat4 {
        match *self {
            Animation::Fixed { axis, degrees } => axis.rotation(degrees.to_radians()),
            // Angles are computed in f64 and wrapped so long runs keep f32 precision.
            Animation::Spin { axis, radians_per_second } => {
                axis.rotation(wrap_angle(radians_per_second as f64 * seconds))
            }
            Animation::FrameSpin { axis, radians_per_frame } => {
                axis.rotation(wrap_angle(radians_per_frame as f64 * frame_index as f64))
            }
            Animation::Custom(f) => f(seconds as f32, frame_index),
        }
    }
}

fn wrap_angle(radians: f64) -> f32 {
    (radians % std::f64::consts::TAU) as f32
}

impl Default for Animation {
    fn default() -> Self {
        Animation::Fixed { axis: Axis::Y, degrees: 0.0 }
    }
}

/// Static position plus rotation law for one mesh.
#[derive(Debug, Copy, Clone)]
pub struct MeshPlacement {
    pub position: Vec3,
    pub animation: Animation,
}

impl MeshPlacement {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            animation: Animation::default(),
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    /// `translate(position) * rotation(t)`: rotate in place, then move.
    pub fn model_matrix(&self, seconds: f64, frame_index: u64) -> Mat4 {
        Mat4::from_translation(self.position) * self.animation.rotation(seconds, frame_index)
    }
}
