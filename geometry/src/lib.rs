//! Geometry primitives for spatial queries: planes, rays and axis-aligned boxes.

mod bounds3;
mod plane;
mod ray;

pub use bounds3::*;
pub use plane::*;
pub use ray::*;

/// Tolerance below which a ray direction is considered parallel to a plane.
pub const EPSILON: f64 = 0.000_001;

/// Returned by distance queries that have no finite answer.
pub const INFINITY: f64 = f64::INFINITY;

pub type Vector3 = glam::DVec3;
pub type Vector4 = glam::DVec4;
pub type Point3 = Vector3;
