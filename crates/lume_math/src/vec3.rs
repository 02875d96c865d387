//! Vector type and the geometric helpers the scatter model is built on.
//!
//! `Vec3` is `glam::DVec3`: this renderer computes in doubles, and the
//! 1e-9 tolerances in the test suite are not reachable in f32.

/// 3-component f64 vector, used for directions and offsets.
pub type Vec3 = glam::DVec3;

/// Alias for positions in world space.
pub type Point3 = Vec3;

/// Alias for RGB values in linear [0, 1] space.
pub type Color = Vec3;

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with unit normal `n`.
///
/// `etai_over_etat` is the ratio of refractive indices across the interface.
/// Uses Snell's law in the perpendicular/parallel decomposition; the caller
/// is responsible for detecting total internal reflection beforehand.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// True if every component of `v` is below 1e-8 in magnitude.
///
/// Catches the degenerate Lambertian scatter direction before it can produce
/// a ray that cannot be normalized.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < 1e-8
}
