//! Builders for the bundled demo scenes.

use lume_math::{random_color, random_color_range, random_f64, random_f64_range};
use lume_render::{Color, Material, Point3, Scene, Sphere, Vec3};
use rand::RngCore;

/// The book-cover field: a large ground sphere, a 22x22 grid of randomly
/// placed and shaded small spheres, and three large feature spheres.
pub fn random_scene(rng: &mut dyn RngCore) -> Scene {
    let mut scene = Scene::new();

    let ground = Material::lambertian(Color::new(0.5, 0.5, 0.5));
    scene.add(Sphere::new(Point3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * random_f64(rng),
                0.2,
                b as f64 + 0.9 * random_f64(rng),
            );

            // Keep the grid clear of the right-hand feature sphere.
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_color(rng) * random_color(rng);
                scene.add(Sphere::new(center, 0.2, Material::lambertian(albedo)));
            } else if choose_mat < 0.95 {
                // Metal; these sit a little higher and render larger.
                let albedo = random_color_range(rng, 0.5, 1.0);
                let fuzz = random_f64_range(rng, 0.0, 0.5);
                scene.add(Sphere::new(
                    center + Vec3::new(0.0, 0.3, 0.0),
                    0.5,
                    Material::metal(albedo, fuzz),
                ));
            } else {
                // Glass
                scene.add(Sphere::new(center, 0.2, Material::dielectric(1.5)));
            }
        }
    }

    scene.add(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Material::dielectric(1.5),
    ));
    scene.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Material::lambertian(Color::new(0.4, 0.2, 0.1)),
    ));
    scene.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
    ));

    scene
}

/// Three spheres straight ahead of the camera. The left sphere nests a
/// negative-radius dielectric shell inside it, leaving hollow glass.
pub fn three_spheres() -> Scene {
    let mut scene = Scene::new();

    scene.add(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ));
    scene.add(Sphere::new(
        Point3::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.1, 0.2, 0.5)),
    ));
    scene.add(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        Material::dielectric(1.5),
    ));
    scene.add(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        -0.4,
        Material::dielectric(1.5),
    ));
    scene.add(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.0),
    ));

    scene
}
