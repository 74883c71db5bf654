//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    surface::{LocalHit, Surface, Transform},
    Response,
};
use lumen_math::{Ray, Vec3};

/// A sphere defined in object space.
///
/// A negative radius keeps the geometry but points the normals inwards,
/// which turns a dielectric sphere into a bubble and a metal one into a
/// mirrored cavity.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    transform: Transform,
    response: Arc<Response>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, response: Arc<Response>) -> Self {
        Self {
            center,
            radius,
            transform: Transform::IDENTITY,
            response,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Surface for Sphere {
    fn hit_object_space(&self, ray: &Ray) -> Option<LocalHit> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Nearest root in the valid interval wins
        let near = (-b - sqrtd) / a;
        let far = (-b + sqrtd) / a;
        let t = if ray.is_valid_t(near) {
            near
        } else if ray.is_valid_t(far) {
            far
        } else {
            return None;
        };

        let point = ray.at(t);
        Some(LocalHit {
            t,
            point,
            normal: (point - self.center) / self.radius,
        })
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn response(&self) -> &Response {
        &self.response
    }
}
