//! Thin-lens perspective camera.

use lume_math::{random_in_unit_disk, Point3, Ray, Vec3};
use rand::RngCore;

/// Maps normalized viewport coordinates to world-space rays.
///
/// All viewport geometry is derived once at construction and never
/// changes, so one camera can serve every render thread.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Point3,
    lower_left_corner: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Build a camera from its viewing parameters.
    ///
    /// `vfov` is the vertical field of view in degrees. `aperture` is the
    /// lens diameter; zero gives a pinhole camera with no defocus blur.
    /// The viewport sits at `focus_dist` along the view direction, so
    /// geometry on that plane stays sharp at any aperture.
    pub fn new(
        lookfrom: Point3,
        lookat: Point3,
        vup: Vec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (lookfrom - lookat).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = lookfrom;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        }
    }

    /// Ray through viewport coordinates `(s, t)` in [0, 1].
    ///
    /// The origin is jittered across the lens disk for depth of field
    /// while the focal-plane target stays fixed. The disk is always
    /// sampled; a zero aperture scales the offset to zero, making the
    /// returned ray deterministic.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }
}
