//! Point types and related functionality

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A point with color information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint3f {
    pub position: Point3f,
    pub color: [u8; 3],
}

impl ColoredPoint3f {
    /// Create a colored point
    pub fn new(position: Point3f, color: [u8; 3]) -> Self {
        Self { position, color }
    }

    /// Create a white point, the fallback when a file carries no colors
    pub fn white(position: Point3f) -> Self {
        Self {
            position,
            color: [255, 255, 255],
        }
    }
}

impl Default for ColoredPoint3f {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            color: [255, 255, 255],
        }
    }
}

impl From<ColoredPoint3f> for Point3f {
    fn from(point: ColoredPoint3f) -> Self {
        point.position
    }
}
