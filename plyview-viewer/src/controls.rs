//! Orbit controls: rotate, pan, and zoom a camera around a pivot

use crate::camera::Camera;
use plyview_core::{Point3f, Vector3f};
use std::f32::consts::FRAC_PI_2;

/// Mouse-driven camera controls orbiting a pivot target
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Orbit pivot; framing a new cloud moves this to the cloud's center
    pub target: Point3f,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            target: Point3f::origin(),
            rotate_speed: 0.005,
            pan_speed: 0.001,
            zoom_speed: 0.1,
            min_distance: 0.01,
        }
    }

    /// Rotate the camera around the pivot, keeping the orbit radius.
    ///
    /// Pitch is clamped just short of the poles so the up vector never
    /// becomes parallel to the view direction.
    pub fn orbit(&self, camera: &mut Camera, delta_x: f32, delta_y: f32) {
        let offset = camera.position - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        let mut yaw = offset.x.atan2(offset.z);
        let mut pitch = (offset.y / radius).asin();

        yaw -= delta_x * self.rotate_speed;
        pitch = (pitch + delta_y * self.rotate_speed).clamp(-FRAC_PI_2 + 0.01, FRAC_PI_2 - 0.01);

        camera.position = self.target
            + Vector3f::new(
                radius * pitch.cos() * yaw.sin(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.cos(),
            );
        camera.target = self.target;
    }

    /// Slide camera and pivot together in the view plane
    pub fn pan(&mut self, camera: &mut Camera, delta_x: f32, delta_y: f32) {
        let offset = camera.position - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        let forward = -offset / radius;
        let right = forward.cross(&camera.up).normalize();
        let up = right.cross(&forward);

        // Scale by the orbit radius so panning feels uniform at any zoom
        let shift = right * (-delta_x * self.pan_speed * radius)
            + up * (delta_y * self.pan_speed * radius);

        camera.position += shift;
        self.target += shift;
        camera.target = self.target;
    }

    /// Move the camera toward or away from the pivot
    pub fn zoom(&self, camera: &mut Camera, scroll: f32) {
        let offset = camera.position - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        let new_radius = (radius * (1.0 - scroll * self.zoom_speed)).max(self.min_distance);
        camera.position = self.target + offset * (new_radius / radius);
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera_at(position: Point3f) -> Camera {
        let mut camera = Camera::default();
        camera.position = position;
        camera.target = Point3f::origin();
        camera
    }

    #[test]
    fn orbit_preserves_radius() {
        let controls = OrbitControls::new();
        let mut camera = camera_at(Point3f::new(0.0, 0.0, 5.0));

        controls.orbit(&mut camera, 40.0, -25.0);

        let radius = (camera.position - controls.target).norm();
        assert_relative_eq!(radius, 5.0, epsilon = 1e-4);
        assert_eq!(camera.target, controls.target);
    }

    #[test]
    fn pitch_is_clamped_at_the_poles() {
        let controls = OrbitControls::new();
        let mut camera = camera_at(Point3f::new(0.0, 0.0, 5.0));

        // Drag far past vertical
        controls.orbit(&mut camera, 0.0, 10_000.0);

        let offset = camera.position - controls.target;
        let pitch = (offset.y / offset.norm()).asin();
        assert!(pitch < FRAC_PI_2);
        assert!(pitch > FRAC_PI_2 - 0.02);
    }

    #[test]
    fn zoom_clamps_to_minimum_distance() {
        let controls = OrbitControls::new();
        let mut camera = camera_at(Point3f::new(0.0, 0.0, 1.0));

        for _ in 0..200 {
            controls.zoom(&mut camera, 1.0);
        }

        let radius = (camera.position - controls.target).norm();
        assert_relative_eq!(radius, controls.min_distance, epsilon = 1e-5);
    }

    #[test]
    fn pan_moves_camera_and_pivot_together() {
        let mut controls = OrbitControls::new();
        let mut camera = camera_at(Point3f::new(0.0, 0.0, 5.0));
        let before = controls.target;

        controls.pan(&mut camera, 100.0, 0.0);

        let moved = controls.target - before;
        assert!(moved.norm() > 0.0);
        assert_eq!(camera.target, controls.target);
        // Orbit radius is unchanged by panning
        assert_relative_eq!((camera.position - controls.target).norm(), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn degenerate_radius_is_a_no_op() {
        let controls = OrbitControls::new();
        let mut camera = camera_at(Point3f::origin());

        controls.orbit(&mut camera, 10.0, 10.0);
        controls.zoom(&mut camera, 1.0);

        assert_eq!(camera.position, Point3f::origin());
    }
}
