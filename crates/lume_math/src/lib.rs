//! Math foundations for the lume path tracer.
//!
//! Provides the f64 vector type and its geometric helpers, the ray and
//! interval types, and the uniform sampling routines every part of the
//! renderer draws from. Everything here is a plain value type; nothing
//! allocates or blocks.

mod interval;
mod ray;
mod sample;
mod vec3;

pub use interval::Interval;
pub use ray::Ray;
pub use sample::{
    random_color, random_color_range, random_f64, random_f64_range, random_in_unit_disk,
    random_in_unit_sphere, random_on_hemisphere, random_unit_vector,
};
pub use vec3::{near_zero, reflect, refract, Color, Point3, Vec3};
