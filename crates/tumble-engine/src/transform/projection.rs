use glam::Mat4;

/// Drawable size in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height; `None` for a degenerate (minimized) viewport.
    pub fn aspect(self) -> Option<f32> {
        self.is_valid()
            .then(|| self.width as f32 / self.height as f32)
    }
}

/// Perspective projection cached against the last valid viewport.
///
/// Inputs other than the aspect ratio are fixed at construction, so the
/// matrix is only rebuilt when the viewport changes shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    fov_y_radians: f32,
    near: f32,
    far: f32,
    aspect: f32,
    matrix: Mat4,
}

impl Projection {
    /// Builds a right-handed GL-convention perspective (depth in [-1, 1]).
    ///
    /// A degenerate viewport falls back to a square aspect until the first
    /// valid [`Projection::set_viewport`].
    pub fn new(fov_y_degrees: f32, viewport: Viewport, near: f32, far: f32) -> Self {
        let fov_y_radians = fov_y_degrees.to_radians();
        let aspect = viewport.aspect().unwrap_or(1.0);
        Self {
            fov_y_radians,
            near,
            far,
            aspect,
            matrix: Mat4::perspective_rh_gl(fov_y_radians, aspect, near, far),
        }
    }

    /// Updates the aspect ratio. Returns `true` if the matrix was rebuilt.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let Some(aspect) = viewport.aspect() else {
            return false;
        };
        if aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        self.matrix = Mat4::perspective_rh_gl(self.fov_y_radians, aspect, self.near, self.far);
        true
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}
