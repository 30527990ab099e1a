//! Camera, projection and per-mesh model transforms.
//!
//! Everything here is pure CPU math on `glam` types; the renderer uploads the
//! results as column-major arrays.

mod animation;
mod camera;
mod projection;

pub use animation::{Animation, Axis, MeshPlacement};
pub use camera::Camera;
pub use projection::{Projection, Viewport};

use glam::Mat4;

/// Model-view matrix for `placement` at the given time, seen from `camera`.
///
/// Pure function of its inputs.
pub fn model_view(camera: &Camera, placement: &MeshPlacement, seconds: f64, frame_index: u64) -> Mat4 {
    camera.view_matrix() * placement.model_matrix(seconds, frame_index)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn model_view_is_reproducible_for_fixed_time() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 8.0));
        let placement = MeshPlacement {
            position: Vec3::new(0.0, -2.0, 0.0),
            animation: Animation::Spin { axis: Axis::Y, radians_per_second: 1.0 },
        };

        let a = model_view(&camera, &placement, 1.25, 0);
        let b = model_view(&camera, &placement, 1.25, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn model_view_matches_hand_computed_matrix() {
        // Quarter turn about Y: x -> -z, z -> x.
        let camera = Camera::new(Vec3::new(0.0, 0.0, 8.0));
        let placement = MeshPlacement {
            position: Vec3::new(0.0, -2.0, 0.0),
            animation: Animation::Spin {
                axis: Axis::Y,
                radians_per_second: std::f32::consts::FRAC_PI_2,
            },
        };

        let mv = model_view(&camera, &placement, 1.0, 0);
        let expected = Mat4::from_cols_array(&[
            0.0, 0.0, -1.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, -2.0, -8.0, 1.0,
        ]);
        assert!(mv.abs_diff_eq(expected, 1e-6), "{mv:?}");
    }

    #[test]
    fn model_view_at_time_zero_is_exact_translation() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 8.0));
        let placement = MeshPlacement {
            position: Vec3::new(0.0, -2.0, 0.0),
            animation: Animation::Spin { axis: Axis::X, radians_per_second: 3.0 },
        };

        assert_eq!(
            model_view(&camera, &placement, 0.0, 0),
            Mat4::from_translation(Vec3::new(0.0, -2.0, -8.0)),
        );
    }

    #[test]
    fn fixed_animation_ignores_time() {
        let camera = Camera::default();
        let placement = MeshPlacement {
            position: Vec3::new(2.0, 1.0, 1.0),
            animation: Animation::Fixed { axis: Axis::X, degrees: 30.0 },
        };

        assert_eq!(
            model_view(&camera, &placement, 0.0, 0),
            model_view(&camera, &placement, 17.5, 1_000),
        );
    }
}
