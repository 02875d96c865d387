//! Sphere primitive.

use lume_math::{Interval, Point3, Ray};

use crate::hittable::HitRecord;
use crate::material::Material;

/// A sphere described by center, radius, and surface material.
///
/// A negative radius is allowed and models a hollow shell: the outward
/// normal `(p - center) / radius` then points toward the center, which
/// is what a nested dielectric sphere relies on to read as hollow glass.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nearest intersection with `ray` inside the open `t_range`.
    ///
    /// Solves `|O - C + tD|^2 = r^2` in the half-b quadratic form and
    /// prefers the smaller root, falling back to the larger one.
    pub fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range.
        let mut root = (-half_b - sqrtd) / a;
        if !t_range.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !t_range.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(HitRecord::new(
            ray,
            root,
            point,
            outward_normal,
            &self.material,
        ))
    }
}
