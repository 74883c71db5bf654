//! Flat list of world surfaces and the intersection search over it.

use crate::{HitRecord, Surface};
use lumen_math::Ray;

/// Every surface in the scene, already flattened out of its group
/// hierarchy and carrying its final world transform.
#[derive(Default)]
pub struct World {
    surfaces: Vec<Box<dyn Surface>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, surface: Box<dyn Surface>) {
        self.surfaces.push(surface);
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn surfaces(&self) -> &[Box<dyn Surface>] {
        &self.surfaces
    }

    /// Nearest hit along the ray within its interval.
    ///
    /// On equal `t` the surface added first wins.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.first_intersection(ray, false)
    }

    /// Any hit within the ray's interval; stops at the first one found.
    pub fn any_intersection(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.first_intersection(ray, true)
    }

    fn first_intersection(&self, ray: &Ray, any: bool) -> Option<HitRecord<'_>> {
        // Shrink a private copy so the caller's interval stays untouched
        let mut search = *ray;
        let mut closest: Option<HitRecord<'_>> = None;

        for surface in &self.surfaces {
            let Some(hit) = surface.hit(&search) else {
                continue;
            };
            if closest.as_ref().is_some_and(|best| hit.t >= best.t) {
                continue;
            }
            if any {
                return Some(hit);
            }
            search.set_t_max(hit.t);
            closest = Some(hit);
        }

        closest
    }
}
