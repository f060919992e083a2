use log::warn;
use serde::{Deserialize, Serialize};
use serde_tuple::{Deserialize_tuple, Serialize_tuple};

use crate::{EPSILON, INFINITY, Point3, Ray, Vector3, Vector4};

/// Infinite plane: all points `p` for which `normal · p + intercept == 0`.
///
/// `abs_normal` caches the component-wise absolute value of `normal` and is recomputed by every
/// defining operation.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PlaneParams", into = "PlaneParams")]
pub struct Plane {
    pub normal: Vector3,
    pub abs_normal: Vector3,
    pub intercept: f64,
}

impl Plane {
    /// Plane through three points, oriented counter-clockwise.
    ///
    /// Collinear or coincident points are not detected and produce a NaN normal, use
    /// [`Plane::try_from_points`] if the input is not known to be well formed.
    pub fn from_points(
        v0: impl Into<Point3>,
        v1: impl Into<Point3>,
        v2: impl Into<Point3>,
    ) -> Self {
        let mut plane = Self::default();
        plane.define_from_points(v0.into(), v1.into(), v2.into());
        plane
    }

    /// Plane through a point with the given normal.
    ///
    /// The normal is expected to be of unit length. It is not normalized, a longer normal scales
    /// all distances by its length.
    pub fn from_normal_and_point(normal: impl Into<Vector3>, point: impl Into<Point3>) -> Self {
        let mut plane = Self::default();
        plane.define_from_normal_and_point(normal.into(), point.into());
        plane
    }

    pub fn try_from_points(
        v0: impl Into<Point3>,
        v1: impl Into<Point3>,
        v2: impl Into<Point3>,
    ) -> Option<Self> {
        let (v0, v1, v2) = (v0.into(), v1.into(), v2.into());
        let (e1, e2) = (v1 - v0, v2 - v0);
        // |e1 × e2| = |e1| |e2| sin(angle), so this bounds the sine independent of scale.
        let cross = e1.cross(e2);
        if cross.length_squared() <= EPSILON * EPSILON * e1.length_squared() * e2.length_squared() {
            warn!("Plane points are collinear or coincident: {v0}, {v1}, {v2}");
            return None;
        }
        Some(Self::from_points(v0, v1, v2))
    }

    pub fn define_from_points(&mut self, v0: Point3, v1: Point3, v2: Point3) {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        self.define_from_normal_and_point(normal, v0);
    }

    pub fn define_from_normal_and_point(&mut self, normal: Vector3, point: Point3) {
        self.normal = normal;
        self.abs_normal = normal.abs();
        self.intercept = -normal.dot(point);
    }

    /// Signed distance, positive on the side the normal points to.
    pub fn distance(&self, point: Point3) -> f64 {
        self.normal.dot(point) + self.intercept
    }

    /// `Σ |normal_i| · |point_i|`.
    ///
    /// This ignores the intercept and is not `distance(point).abs()`. It measures the extent of a
    /// box with half size `point` along the normal and is used for bounding volume rejection.
    pub fn abs_distance(&self, point: Point3) -> f64 {
        self.abs_normal.dot(point.abs())
    }

    /// [`Plane::abs_distance`] for a point whose components are all non-negative.
    pub fn abs_distance_fast(&self, abs_point: Point3) -> f64 {
        // Not checked: negative components silently produce a wrong result.
        self.abs_normal.dot(abs_point)
    }

    /// Distance along `ray` at which it crosses the plane, or [`INFINITY`] if the ray runs
    /// parallel to it.
    ///
    /// Solved as `(intercept - normal · origin) / (normal · dir)`. Ray casts compare the result
    /// against [`INFINITY`] to detect a miss. For the geometric hit point in front of the ray, see
    /// [`Ray::intersect_plane`].
    pub fn hit_distance(&self, ray: &Ray) -> f64 {
        let d = self.normal.dot(ray.dir);
        if d.abs() >= EPSILON {
            (-self.normal.dot(ray.origin) + self.intercept) / d
        } else {
            INFINITY
        }
    }

    /// The same plane facing the other way.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            abs_normal: self.abs_normal,
            intercept: -self.intercept,
        }
    }

    /// Closest point on the plane.
    pub fn project(&self, point: Point3) -> Point3 {
        point - self.normal * self.distance(point)
    }

    pub fn to_vector4(&self) -> Vector4 {
        self.normal.extend(self.intercept)
    }
}

impl From<Vector4> for Plane {
    fn from(v: Vector4) -> Self {
        let normal = v.truncate();
        Self {
            normal,
            abs_normal: normal.abs(),
            intercept: v.w,
        }
    }
}

impl From<Plane> for Vector4 {
    fn from(plane: Plane) -> Self {
        plane.to_vector4()
    }
}

/// Serialized form, `abs_normal` is derived.
#[derive(Serialize_tuple, Deserialize_tuple)]
struct PlaneParams {
    normal: Vector3,
    intercept: f64,
}

impl From<PlaneParams> for Plane {
    fn from(PlaneParams { normal, intercept }: PlaneParams) -> Self {
        Self {
            normal,
            abs_normal: normal.abs(),
            intercept,
        }
    }
}

impl From<Plane> for PlaneParams {
    fn from(plane: Plane) -> Self {
        Self {
            normal: plane.normal,
            intercept: plane.intercept,
        }
    }
}
