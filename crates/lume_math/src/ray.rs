//! Ray type for path tracing.

use crate::vec3::{Point3, Vec3};

/// A ray with origin and direction.
///
/// The direction is not required to be normalized; intersection code works
/// in terms of the parameter `t` along the unnormalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Point3,
    /// Direction vector
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute the point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
