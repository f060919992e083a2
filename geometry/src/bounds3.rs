use crate::{Plane, Point3, Vector3};

/// Where a volume lies relative to a plane's normal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaneSide {
    Front,
    Back,
    Intersecting,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    pub fn new(min: impl Into<Point3>, max: impl Into<Point3>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_size(&self) -> Vector3 {
        self.size() * 0.5
    }

    /// Classifies the box against `plane`. Boxes that touch the plane are `Intersecting`.
    ///
    /// `min` must not exceed `max` in any component.
    pub fn side_of_plane(&self, plane: &Plane) -> PlaneSide {
        let dist = plane.distance(self.center());
        let abs_dist = plane.abs_distance_fast(self.half_size());

        if dist < -abs_dist {
            PlaneSide::Back
        } else if dist > abs_dist {
            PlaneSide::Front
        } else {
            PlaneSide::Intersecting
        }
    }
}
