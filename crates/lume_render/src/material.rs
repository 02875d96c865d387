//! Surface scattering models.

use lume_math::{
    near_zero, random_f64, random_in_unit_sphere, random_unit_vector, reflect, refract, Color, Ray,
};
use rand::RngCore;

use crate::hittable::HitRecord;

/// The closed set of surface materials.
///
/// Matching on the tag keeps scatter dispatch exhaustive; a material is a
/// small immutable value, so spheres hold their material directly and hit
/// records borrow it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface tinted by `albedo`.
    Lambertian { albedo: Color },
    /// Reflective surface; `fuzz` in [0, 1] perturbs the mirror direction.
    Metal { albedo: Color, fuzz: f64 },
    /// Clear refractive surface such as glass.
    Dielectric { refractive_index: f64 },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Self::Lambertian { albedo }
    }

    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Self::Metal { albedo, fuzz }
    }

    pub fn dielectric(refractive_index: f64) -> Self {
        Self::Dielectric { refractive_index }
    }

    /// Scatter `ray_in` at the surface described by `rec`.
    ///
    /// Returns the attenuation and the bounced ray, or `None` when the
    /// surface absorbs the ray. Only metal ever absorbs, at grazing
    /// reflections that fuzz pushes below the surface.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut scatter_direction = rec.normal + random_unit_vector(rng);

                // Catch the degenerate direction where the sample cancels
                // the normal exactly.
                if near_zero(scatter_direction) {
                    scatter_direction = rec.normal;
                }

                Some((albedo, Ray::new(rec.point, scatter_direction)))
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction.normalize(), rec.normal);
                let direction = reflected + fuzz * random_in_unit_sphere(rng);

                if direction.dot(rec.normal) <= 0.0 {
                    return None;
                }
                Some((albedo, Ray::new(rec.point, direction)))
            }
            Material::Dielectric { refractive_index } => {
                let refraction_ratio = if rec.front_face {
                    1.0 / refractive_index
                } else {
                    refractive_index
                };

                let unit_direction = ray_in.direction.normalize();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction =
                    if cannot_refract || reflectance(cos_theta, refraction_ratio) > random_f64(rng)
                    {
                        reflect(unit_direction, rec.normal)
                    } else {
                        refract(unit_direction, rec.normal, refraction_ratio)
                    };

                Some((Color::ONE, Ray::new(rec.point, direction)))
            }
        }
    }
}

/// Schlick's reflectance approximation.
fn reflectance(cosine: f64, refraction_ratio: f64) -> f64 {
    let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lume_math::{Point3, Vec3};
    use rand::rngs::StdRng;
    use rand::{Error, SeedableRng};

    /// Replays a fixed sequence of raw words, so a test can steer every
    /// uniform draw a scatter makes.
    struct SequenceRng {
        values: Vec<u64>,
        index: usize,
    }

    impl SequenceRng {
        fn new(values: Vec<u64>) -> Self {
            Self { values, index: 0 }
        }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let value = self.values[self.index % self.values.len()];
            self.index += 1;
            value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn front_hit(material: &Material) -> HitRecord<'_> {
        HitRecord {
            point: Point3::ZERO,
            normal: Vec3::new(0.0, 0.0, 1.0),
            t: 1.0,
            front_face: true,
            material,
        }
    }

    #[test]
    fn test_lambertian_attenuation_is_albedo() {
        let albedo = Color::new(0.8, 0.4, 0.2);
        let material = Material::lambertian(albedo);
        let rec = front_hit(&material);
        let ray_in = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rng = StdRng::seed_from_u64(42);
        let (attenuation, scattered) = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert_eq!(attenuation, albedo);
        assert_eq!(scattered.origin, rec.point);
    }

    #[test]
    fn test_lambertian_near_zero_falls_back_to_normal() {
        let material = Material::lambertian(Color::new(0.5, 0.5, 0.5));
        let rec = front_hit(&material);
        let ray_in = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

        // Raw words decode to the cube sample (0, 0, -0.5), which normalizes
        // to exactly -normal and cancels it.
        let mut rng = SequenceRng::new(vec![1 << 63, 1 << 63, 1 << 62]);
        let (_, scattered) = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert_eq!(scattered.direction, rec.normal);
    }

    #[test]
    fn test_metal_fuzz_zero_mirrors_exactly() {
        let albedo = Color::new(0.7, 0.6, 0.5);
        let material = Material::metal(albedo, 0.0);
        let rec = front_hit(&material);
        let ray_in = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rng = StdRng::seed_from_u64(42);
        let (attenuation, scattered) = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert_eq!(attenuation, albedo);
        // Head-on, the mirror direction has no random contribution at all.
        assert_eq!(scattered.direction, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_metal_grazing_reflection_absorbed() {
        let material = Material::metal(Color::new(0.7, 0.6, 0.5), 0.0);
        let rec = front_hit(&material);
        // Incoming ray sliding along the surface reflects to a direction
        // with zero normal component, which counts as absorbed.
        let ray_in = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let mut rng = StdRng::seed_from_u64(42);
        assert!(material.scatter(&ray_in, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_dielectric_attenuation_is_unity() {
        let material = Material::dielectric(1.5);
        let rec = front_hit(&material);
        let ray_in = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let (attenuation, _) = material.scatter(&ray_in, &rec, &mut rng).unwrap();
            assert_eq!(attenuation, Color::ONE);
        }
    }

    #[test]
    fn test_dielectric_refracts_head_on() {
        let material = Material::dielectric(1.5);
        let rec = front_hit(&material);
        let ray_in = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

        // A draw of 0.5 clears the head-on Schlick reflectance (r0 = 0.04),
        // forcing the refraction branch; head-on, refraction is straight
        // through.
        let mut rng = SequenceRng::new(vec![1 << 63]);
        let (_, scattered) = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert!((scattered.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-9);
    }

    #[test]
    fn test_dielectric_reflects_when_draw_is_low() {
        let material = Material::dielectric(1.5);
        let rec = front_hit(&material);
        let ray_in = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));

        // A draw of exactly 0 always loses to the reflectance term.
        let mut rng = SequenceRng::new(vec![0]);
        let (_, scattered) = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert!((scattered.direction - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material = Material::dielectric(1.5);
        let sqrt_half = std::f64::consts::FRAC_1_SQRT_2;
        // Back-face hit: the ray travels inside the glass at 45 degrees,
        // beyond the critical angle for a ratio of 1.5.
        let rec = HitRecord {
            point: Point3::ZERO,
            normal: Vec3::new(0.0, 0.0, 1.0),
            t: 1.0,
            front_face: false,
            material: &material,
        };
        let ray_in = Ray::new(
            Point3::new(-sqrt_half, 0.0, sqrt_half),
            Vec3::new(sqrt_half, 0.0, -sqrt_half),
        );

        let mut rng = StdRng::seed_from_u64(42);
        let (attenuation, scattered) = material.scatter(&ray_in, &rec, &mut rng).unwrap();

        assert_eq!(attenuation, Color::ONE);
        let expected = Vec3::new(sqrt_half, 0.0, sqrt_half);
        assert!((scattered.direction - expected).length() < 1e-9);
    }

    #[test]
    fn test_attenuation_never_exceeds_albedo() {
        let albedo = Color::new(0.9, 0.1, 0.6);
        let mut rng = StdRng::seed_from_u64(7);
        let ray_in = Ray::new(Point3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));

        for material in [Material::lambertian(albedo), Material::metal(albedo, 0.3)] {
            let rec = front_hit(&material);
            for _ in 0..50 {
                if let Some((attenuation, _)) = material.scatter(&ray_in, &rec, &mut rng) {
                    assert!(attenuation.x <= albedo.x);
                    assert!(attenuation.y <= albedo.y);
                    assert!(attenuation.z <= albedo.z);
                }
            }
        }
    }
}
