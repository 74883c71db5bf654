//! Surface trait and HitRecord for ray-object intersection.

use crate::Response;
use lumen_math::{MathError, Matrix, Ray, Vec3};

/// Record of a ray-surface intersection, in world space.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// How the hit surface responds to light
    pub response: &'a Response,
}

/// An intersection expressed in the surface's own object space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHit {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
}

/// A resolved object-to-world transform together with the two matrices
/// derived from it. The three are only ever replaced as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Object space to world space
    pub matrix: Matrix,
    /// World space to object space
    pub inverse: Matrix,
    /// Maps object-space normals to world space
    pub inverse_transpose: Matrix,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        matrix: Matrix::IDENTITY,
        inverse: Matrix::IDENTITY,
        inverse_transpose: Matrix::IDENTITY,
    };

    /// Derive the inverse and inverse-transpose of `matrix`.
    pub fn from_matrix(matrix: Matrix) -> Result<Self, MathError> {
        let inverse = matrix.invert()?;
        Ok(Self {
            matrix,
            inverse,
            inverse_transpose: inverse.transpose(),
        })
    }
}

/// Trait for renderable surfaces.
///
/// Implementors only supply object-space intersection math; the provided
/// `hit` moves rays into object space and results back into world space.
pub trait Surface: Send + Sync {
    /// Intersect a ray that is already in object space.
    ///
    /// Must only report parameters accepted by `ray.is_valid_t`.
    fn hit_object_space(&self, ray: &Ray) -> Option<LocalHit>;

    fn transform(&self) -> &Transform;

    fn set_transform(&mut self, transform: Transform);

    fn response(&self) -> &Response;

    /// Map a world-space ray into object space.
    ///
    /// The direction is not renormalized, so `t` means the same thing in
    /// both spaces and the ray's interval carries over unchanged.
    fn untransform_ray(&self, ray: &Ray) -> Ray {
        let inverse = &self.transform().inverse;
        Ray::with_interval(
            inverse.transform_point(ray.origin()),
            inverse.transform_vector(ray.direction()),
            ray.t_min(),
            ray.t_max(),
        )
    }

    /// Intersect a world-space ray.
    fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let local = self.hit_object_space(&self.untransform_ray(ray))?;
        let transform = self.transform();

        Some(HitRecord {
            t: local.t,
            p: transform.matrix.transform_point(local.point),
            normal: transform
                .inverse_transpose
                .transform_vector(local.normal)
                .normalize(),
            response: self.response(),
        })
    }
}
