//! Intersection records and the scene container.

use lume_math::{Interval, Point3, Ray, Vec3};

use crate::material::Material;
use crate::sphere::Sphere;

/// Geometry of the nearest intersection along a ray.
///
/// Produced by hit tests and consumed immediately by the integrator;
/// it borrows the hit surface's material for the duration of the bounce.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub point: Point3,
    /// Unit normal, oriented against the incoming ray.
    pub normal: Vec3,
    pub t: f64,
    /// Whether the ray struck the outward-facing side.
    pub front_face: bool,
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the outward surface normal.
    ///
    /// `outward_normal` must be unit length. The stored normal is flipped
    /// to face the incoming ray, and `front_face` records which side was
    /// struck, so materials can assume the normal points toward them.
    pub fn new(
        ray: &Ray,
        t: f64,
        point: Point3,
        outward_normal: Vec3,
        material: &'a Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            point,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Closed set of renderable shapes.
#[derive(Debug, Clone)]
pub enum Primitive {
    Sphere(Sphere),
}

impl Primitive {
    pub fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, t_range),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

/// An ordered collection of primitives, intersected linearly.
///
/// Populated before rendering starts and only read afterwards, so rays
/// on different threads can traverse it concurrently.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.objects.push(primitive.into());
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Nearest hit within `t_range`, or `None` if every primitive misses.
    ///
    /// Linear scan; the search range shrinks to the closest `t` found so
    /// far, so the returned record is the closest hit regardless of
    /// insertion order.
    pub fn hit(&self, ray: &Ray, t_range: Interval) -> Option<HitRecord<'_>> {
        let mut closest = t_range.max;
        let mut best = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, Interval::new(t_range.min, closest)) {
                closest = rec.t;
                best = Some(rec);
            }
        }

        best
    }
}
