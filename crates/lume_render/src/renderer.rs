//! Core path tracing loop.
//!
//! `ray_color` is the recursive integrator; around it sit a
//! single-threaded driver for tests and small renders and a rayon
//! driver that hands each scanline its own seeded RNG stream.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use lume_math::{random_f64, Color, Interval, Ray};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::hittable::Scene;
use crate::output::Film;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Samples per pixel for anti-aliasing.
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth.
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            samples_per_pixel: 20,
            max_depth: 20,
        }
    }
}

/// Compute the colour seen along `ray`.
///
/// Traces bounces recursively until the ray escapes to the sky, is
/// absorbed, or runs out of bounces.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Past the bounce limit, no more light is gathered.
    if depth == 0 {
        return Color::ZERO;
    }

    // The 0.001 floor keeps bounced rays from re-hitting their own origin.
    match scene.hit(ray, Interval::new(0.001, f64::INFINITY)) {
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some((attenuation, scattered)) => {
                attenuation * ray_color(&scattered, scene, depth - 1, rng)
            }
            None => Color::ZERO,
        },
        None => sky_gradient(ray),
    }
}

/// Background gradient between white and sky blue.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::ONE + t * Color::new(0.5, 0.7, 1.0)
}

/// Average `samples_per_pixel` jittered samples for pixel `(x, y)`.
///
/// Image rows count down from the top while the camera's vertical axis
/// points up, so `y` is flipped when deriving `t`.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..settings.samples_per_pixel {
        let s = (x as f64 + random_f64(rng)) / (settings.width - 1) as f64;
        let t = ((settings.height - 1 - y) as f64 + random_f64(rng)) / (settings.height - 1) as f64;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, scene, settings.max_depth, rng);
    }

    pixel_color / settings.samples_per_pixel as f64
}

/// Single-threaded driver; every pixel draws from the one injected RNG.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    settings: &RenderSettings,
    rng: &mut dyn RngCore,
) -> Film {
    let mut film = Film::new(settings.width, settings.height);

    for y in 0..settings.height {
        for x in 0..settings.width {
            let color = render_pixel(camera, scene, x, y, settings, rng);
            film.set(x, y, color);
        }
    }

    film
}

/// Parallel driver; scanlines render across the rayon pool.
///
/// Each row draws from its own `SmallRng` seeded with `base_seed` plus
/// the row index, so a given seed produces the same image at any thread
/// count.
pub fn render_parallel(
    camera: &Camera,
    scene: &Scene,
    settings: &RenderSettings,
    base_seed: u64,
) -> Film {
    info!(
        "Rendering {}x{} at {} spp on {} threads...",
        settings.width,
        settings.height,
        settings.samples_per_pixel,
        rayon::current_num_threads()
    );
    let render_start = std::time::Instant::now();

    let progress = ProgressBar::new(settings.height as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap(),
    );

    let rows: Vec<Vec<Color>> = (0..settings.height)
        .into_par_iter()
        .map(|y| {
            let mut rng = SmallRng::seed_from_u64(base_seed.wrapping_add(y as u64));
            let row: Vec<Color> = (0..settings.width)
                .map(|x| render_pixel(camera, scene, x, y, settings, &mut rng))
                .collect();
            progress.inc(1);
            row
        })
        .collect();
    progress.finish();
    info!("Render finished in {:.2?}", render_start.elapsed());

    Film {
        width: settings.width,
        height: settings.height,
        pixels: rows.into_iter().flatten().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use lume_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// One small sphere over a large ground sphere, both diffuse.
    fn two_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            Material::lambertian(Color::new(0.5, 0.5, 0.5)),
        ));
        scene.add(Sphere::new(
            Point3::new(0.0, -100.5, -1.0),
            100.0,
            Material::lambertian(Color::new(0.8, 0.8, 0.0)),
        ));
        scene
    }

    fn front_camera() -> Camera {
        Camera::new(
            Point3::ZERO,
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            1.5,
            0.0,
            1.0,
        )
    }

    #[test]
    fn test_depth_zero_is_black() {
        let scene = two_sphere_scene();
        let mut rng = StdRng::seed_from_u64(1);
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(ray_color(&ray, &scene, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_miss_reproduces_sky_gradient() {
        let scene = two_sphere_scene();
        let mut rng = StdRng::seed_from_u64(1);

        // Straight up misses both spheres: t = 1, pure sky blue.
        let up = Ray::new(Point3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let color = ray_color(&up, &scene, 10, &mut rng);
        assert!((color - Color::new(0.5, 0.7, 1.0)).abs().max_element() < 1e-12);

        // A horizontal ray in an empty scene sits halfway up the gradient.
        let ahead = Ray::new(Point3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let color = ray_color(&ahead, &Scene::new(), 10, &mut rng);
        assert!((color - Color::new(0.75, 0.85, 1.0)).abs().max_element() < 1e-12);
    }

    #[test]
    fn test_hits_are_darker_than_white() {
        let scene = two_sphere_scene();
        let mut rng = StdRng::seed_from_u64(3);

        // Straight at the small sphere, depth 1: the bounce terminates, so
        // attenuation alone bounds the result below pure white.
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = ray_color(&ray, &scene, 1, &mut rng);
        assert!(color.x < 1.0 && color.y < 1.0 && color.z < 1.0);
    }

    #[test]
    fn test_render_fills_film() {
        let scene = two_sphere_scene();
        let camera = front_camera();
        let settings = RenderSettings {
            width: 6,
            height: 4,
            samples_per_pixel: 2,
            max_depth: 3,
        };

        let mut rng = StdRng::seed_from_u64(5);
        let film = render(&camera, &scene, &settings, &mut rng);

        assert_eq!(film.width, 6);
        assert_eq!(film.height, 4);
        assert_eq!(film.pixels.len(), 24);
        for pixel in &film.pixels {
            assert!(pixel.x >= 0.0 && pixel.y >= 0.0 && pixel.z >= 0.0);
            assert!(pixel.x.is_finite() && pixel.y.is_finite() && pixel.z.is_finite());
        }
    }

    #[test]
    fn test_render_parallel_is_deterministic() {
        let scene = two_sphere_scene();
        let camera = front_camera();
        let settings = RenderSettings {
            width: 12,
            height: 8,
            samples_per_pixel: 2,
            max_depth: 3,
        };

        let first = render_parallel(&camera, &scene, &settings, 99);
        let second = render_parallel(&camera, &scene, &settings, 99);

        assert_eq!(first.pixels, second.pixels);
    }
}
