//! lume render core - CPU path tracing.
//!
//! A recursive Monte Carlo path tracer over sphere primitives with
//! diffuse, metal, and dielectric materials, a thin-lens camera, and
//! single-threaded and rayon-parallel pixel drivers.

mod camera;
mod hittable;
mod material;
mod output;
mod renderer;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Primitive, Scene};
pub use material::Material;
pub use output::{color_to_rgb8, linear_to_gamma, Film, OutputError, OutputResult};
pub use renderer::{ray_color, render, render_parallel, render_pixel, RenderSettings};
pub use sphere::Sphere;

/// Re-export the math value types from lume_math.
pub use lume_math::{Color, Interval, Point3, Ray, Vec3};
