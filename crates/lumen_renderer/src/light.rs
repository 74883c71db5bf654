use lumen_math::{Color, Ray, Vec3};

/// Point light used by the direct illumination shaders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Color,
}

impl Light {
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// Unit direction from `point` towards the light.
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }

    /// Ray from `point` to the light.
    ///
    /// The direction is left unnormalized so the light itself sits at
    /// `t = 1`; anything hit in `[EPSILON, 1]` blocks it.
    pub fn shadow_ray(&self, point: Vec3) -> Ray {
        Ray::with_interval(point, self.position - point, Ray::EPSILON, 1.0)
    }
}
