//! Camera framing for loaded geometry
//!
//! A [`FitFrame`] turns a bounding volume and a perspective camera's
//! vertical field of view into a camera placement that fits the whole
//! volume in view. It is computed once per load and consumed immediately
//! to set the camera position, the look-at target, and the orbit pivot.

use crate::bounds::Aabb;
use crate::error::{Error, Result};
use crate::point::{Point3f, Vector3f};

/// A camera placement that frames a bounding volume
///
/// The placement puts the eye at `center + (0, 0, distance)` looking at
/// `center`, where `distance` is the minimal distance at which a sphere of
/// diameter `max_extent` fits inside the vertical field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitFrame {
    center: Point3f,
    extents: Vector3f,
    max_extent: f32,
    vertical_fov: f32,
    distance: f32,
}

impl FitFrame {
    /// Compute a frame for a bounding volume.
    ///
    /// `vertical_fov` is in radians and must lie strictly between 0 and pi.
    /// Center and extents must be finite, extents non-negative. A zero-size
    /// volume is accepted and yields a zero distance, collapsing the eye
    /// onto the center.
    pub fn new(center: Point3f, extents: Vector3f, vertical_fov: f32) -> Result<Self> {
        let finite =
            center.coords.iter().all(|c| c.is_finite()) && extents.iter().all(|c| c.is_finite());
        if !finite {
            return Err(Error::NonFiniteBounds {
                center: center.coords.into(),
                extents: extents.into(),
            });
        }
        if extents.iter().any(|&c| c < 0.0) {
            return Err(Error::NegativeExtents(extents.into()));
        }
        if !(vertical_fov > 0.0 && vertical_fov < std::f32::consts::PI) {
            return Err(Error::FovOutOfRange(vertical_fov));
        }

        let max_extent = extents.x.max(extents.y).max(extents.z);
        let distance = (max_extent / (vertical_fov / 2.0).sin()).abs();

        Ok(Self {
            center,
            extents,
            max_extent,
            vertical_fov,
            distance,
        })
    }

    /// Compute a frame for the given bounding box
    pub fn for_bounds(bounds: &Aabb, vertical_fov: f32) -> Result<Self> {
        Self::new(bounds.center(), bounds.extents(), vertical_fov)
    }

    /// Camera position: the center offset along +Z by the fit distance
    pub fn eye(&self) -> Point3f {
        self.center + Vector3f::new(0.0, 0.0, self.distance)
    }

    /// Look-at target and orbit pivot
    pub fn target(&self) -> Point3f {
        self.center
    }

    /// Camera-to-center distance
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Largest extent of the framed volume
    pub fn max_extent(&self) -> f32 {
        self.max_extent
    }
}
