use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{EPSILON, Plane, Point3, Vector3};

// Ray in 3D space, `dir` is expected to be normalized.
#[derive(Debug, Copy, Clone, PartialEq, Serialize_tuple, Deserialize_tuple)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vector3,
}

impl Ray {
    pub fn new(origin: impl Into<Point3>, dir: impl Into<Vector3>) -> Self {
        Self {
            origin: origin.into(),
            dir: dir.into(),
        }
    }

    pub fn from_points(origin: impl Into<Point3>, target: impl Into<Point3>) -> Option<Self> {
        let origin = origin.into();
        let target = target.into();

        let mut dir = target - origin;
        if dir.length_squared() < EPSILON * EPSILON {
            return None;
        }
        dir = dir.normalize();
        Some(Self::new(origin, dir))
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.dir * t
    }

    /// The point where the ray crosses `plane` in front of its origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Point3> {
        let denom = plane.normal.dot(self.dir);
        if denom.abs() < EPSILON {
            return None;
        }
        let t = -plane.distance(self.origin) / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.point_at(t))
    }
}
