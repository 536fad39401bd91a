//! Axis-aligned bounding volumes

use crate::point::{Point3f, Vector3f};

/// Axis-aligned bounding box of a point set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3f,
    pub max: Point3f,
}

impl Aabb {
    /// Compute the bounding box of a point set, `None` if the set is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3f>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;

        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some(Self { min, max })
    }

    /// Centroid of the box
    pub fn center(&self) -> Point3f {
        Point3f::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Size of the box along each axis
    pub fn extents(&self) -> Vector3f {
        self.max - self.min
    }

    /// Largest extent across all three axes
    pub fn max_extent(&self) -> f32 {
        let e = self.extents();
        e.x.max(e.y).max(e.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_set_has_no_bounds() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn single_point_is_degenerate() {
        let p = Point3f::new(1.0, -2.0, 3.0);
        let bounds = Aabb::from_points(std::iter::once(p)).unwrap();
        assert_eq!(bounds.center(), p);
        assert_eq!(bounds.extents(), Vector3f::zeros());
        assert_eq!(bounds.max_extent(), 0.0);
    }

    #[test]
    fn bounds_of_a_cube() {
        let points = vec![
            Point3f::new(0.0, 1.0, 2.0),
            Point3f::new(2.0, 3.0, 4.0),
            Point3f::new(1.0, 2.0, 3.0),
        ];
        let bounds = Aabb::from_points(points).unwrap();

        assert_eq!(bounds.min, Point3f::new(0.0, 1.0, 2.0));
        assert_eq!(bounds.max, Point3f::new(2.0, 3.0, 4.0));
        assert_relative_eq!(bounds.center(), Point3f::new(1.0, 2.0, 3.0));
        assert_relative_eq!(bounds.extents(), Vector3f::new(2.0, 2.0, 2.0));
        assert_relative_eq!(bounds.max_extent(), 2.0);
    }

    #[test]
    fn max_extent_picks_the_widest_axis() {
        let bounds = Aabb::from_points(vec![
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 5.0, 2.0),
        ])
        .unwrap();
        assert_relative_eq!(bounds.max_extent(), 5.0);
    }
}
