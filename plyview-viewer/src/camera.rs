//! Camera utilities for the viewer

use nalgebra::{Matrix4, Perspective3};
use plyview_core::{Point3f, Vector3f};

/// A perspective camera looking at a target point
///
/// The field of view is stored in degrees, as the viewer exposes it, and
/// converted to radians for projection and framing.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3f,
    pub target: Point3f,
    pub up: Vector3f,
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(
        position: Point3f,
        target: Point3f,
        up: Vector3f,
        fov_deg: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov_deg,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Vertical field of view in radians
    pub fn vertical_fov_radians(&self) -> f32 {
        self.fov_deg.to_radians()
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(
            self.aspect_ratio,
            self.vertical_fov_radians(),
            self.near,
            self.far,
        );
        perspective.into_inner()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3f::new(0.0, 0.0, 2.0),
            Point3f::origin(),
            Vector3f::new(0.0, 1.0, 0.0),
            75.0,
            16.0 / 9.0,
            0.1,
            1000.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fov_is_converted_to_radians() {
        let camera = Camera::default();
        assert_relative_eq!(camera.vertical_fov_radians(), 1.309, epsilon = 1e-3);
    }

    #[test]
    fn view_matrix_puts_target_on_the_forward_axis() {
        let mut camera = Camera::default();
        camera.position = Point3f::new(1.0, 2.0, 6.0);
        camera.target = Point3f::new(1.0, 2.0, 3.0);

        let viewed = camera.view_matrix().transform_point(&camera.target);
        assert_relative_eq!(viewed.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(viewed.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(viewed.z, -3.0, epsilon = 1e-5);
    }

    #[test]
    fn projection_matrix_is_finite() {
        let proj = Camera::default().projection_matrix();
        assert!(proj.iter().all(|v| v.is_finite()));
    }
}
