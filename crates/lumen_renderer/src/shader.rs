//! Direct illumination shaders.
//!
//! Shaders compute a final color from the scene's point lights and never
//! spawn secondary rays beyond shadow tests.

use crate::{HitRecord, Scene};
use lumen_math::{Color, Ray, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shader {
    /// Diffuse only: `diffuse * intensity * max(0, n.l)` per visible light.
    Lambertian { diffuse: Color },

    /// Diffuse plus a Blinn-style specular highlight.
    Phong {
        diffuse: Color,
        specular: Color,
        exponent: f32,
    },
}

impl Shader {
    pub fn lambertian(diffuse: Color) -> Self {
        Shader::Lambertian { diffuse }
    }

    pub fn phong(diffuse: Color, specular: Color, exponent: f32) -> Self {
        Shader::Phong {
            diffuse,
            specular,
            exponent,
        }
    }

    /// Shade a hit point with every light that is not shadowed.
    ///
    /// `depth` is accepted for symmetry with the scatter path; shading does
    /// not recurse.
    pub fn shade(&self, scene: &Scene, rec: &HitRecord, ray: &Ray, _depth: u32) -> Color {
        let to_eye = -ray.direction().normalize();

        scene
            .lights()
            .iter()
            .filter(|light| !scene.is_shadowed(rec.p, light))
            .fold(Color::ZERO, |color, light| {
                let to_light = light.direction_from(rec.p);
                color + self.light_contribution(rec.normal, to_eye, to_light, light.intensity)
            })
    }

    fn light_contribution(&self, normal: Vec3, to_eye: Vec3, to_light: Vec3, intensity: Color) -> Color {
        match *self {
            Shader::Lambertian { diffuse } => diffuse_term(diffuse, intensity, normal, to_light),
            Shader::Phong {
                diffuse,
                specular,
                exponent,
            } => {
                let half = (to_eye + to_light).try_normalize().unwrap_or(Vec3::ZERO);
                let highlight = half.dot(normal).max(0.0).powf(exponent);
                diffuse_term(diffuse, intensity, normal, to_light) + specular * intensity * highlight
            }
        }
    }
}

fn diffuse_term(diffuse: Color, intensity: Color, normal: Vec3, to_light: Vec3) -> Color {
    diffuse * intensity * normal.dot(to_light).max(0.0)
}
