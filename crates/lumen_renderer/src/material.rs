//! Scatter materials for path-style light transport.

use crate::{sampling::random_in_unit_sphere, HitRecord};
use lumen_math::{Color, ColorExt, Ray, VectorExt};
use rand::{Rng, RngCore};

/// Outgoing ray and the fraction of light it carries back.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Materials that describe how light interacts with surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface scattering towards a random point around the normal.
    Lambertian { albedo: Color },

    /// Specular reflection. `fuzz` of 0 is a perfect mirror.
    Metal { albedo: Color, fuzz: f32 },

    /// Clear glass-like material; never absorbs.
    Dielectric { refractive_index: f32 },
}

impl Material {
    /// Create a new Lambertian material with the given albedo color.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a new Metal material. Fuzziness is capped at 1.
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }

    /// Create a new Dielectric material.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn dielectric(refractive_index: f32) -> Self {
        Material::Dielectric { refractive_index }
    }

    /// Scatter an incoming ray.
    ///
    /// `None` means the ray was absorbed.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => {
                let target = rec.p + rec.normal + random_in_unit_sphere(rng);
                Some(ScatterResult {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, target - rec.p),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = ray_in.direction().normalize().reflect_about(rec.normal);
                let scattered = Ray::new(rec.p, reflected + fuzz * random_in_unit_sphere(rng));

                // Reflected below the surface: absorbed
                if scattered.direction().dot(rec.normal) > 0.0 {
                    Some(ScatterResult {
                        attenuation: albedo,
                        scattered,
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { refractive_index } => {
                Some(scatter_dielectric(refractive_index, ray_in, rec, rng))
            }
        }
    }
}

fn scatter_dielectric(refractive_index: f32, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> ScatterResult {
    let direction = ray_in.direction();
    let ray_dot_normal = direction.dot(rec.normal);

    // Leaving the material when the ray runs along the normal
    let (outward_normal, ratio, cosine) = if ray_dot_normal > 0.0 {
        (
            -rec.normal,
            refractive_index,
            refractive_index * ray_dot_normal / direction.length(),
        )
    } else {
        (
            rec.normal,
            1.0 / refractive_index,
            -ray_dot_normal / direction.length(),
        )
    };

    let scattered_direction = match direction.refract_through(outward_normal, ratio) {
        Some(refracted) if rng.gen::<f32>() >= schlick(cosine, refractive_index) => refracted,
        _ => direction.reflect_about(rec.normal),
    };

    ScatterResult {
        attenuation: Color::WHITE,
        scattered: Ray::new(rec.p, scattered_direction),
    }
}

/// Schlick's approximation for reflectance
pub(crate) fn schlick(cosine: f32, refractive_index: f32) -> f32 {
    let r0 = ((1.0 - refractive_index) / (1.0 + refractive_index)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
