//! Camera for ray generation.

use crate::random_in_unit_disk;
use lumen_math::{Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Parameters of a projection camera.
///
/// The view window sits `projection_distance` in front of `eye` and is
/// centered on the view direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub view_direction: Vec3,
    pub up: Vec3,
    pub projection_distance: f32,
    pub view_width: f32,
    pub view_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 1.0),
            view_direction: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
            projection_distance: 1.0,
            view_width: 1.0,
            view_height: 1.0,
        }
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,

    // Orthonormal basis; w points away from the view direction
    u: Vec3,
    v: Vec3,
    w: Vec3,

    distance: f32,
    view_width: f32,
    view_height: f32,
    lens_radius: f32,

    // Projection windows follow the image; look-at windows keep their aspect
    fit_to_image: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::projection(CameraConfig::default())
    }
}

impl Camera {
    /// Pinhole camera from explicit view window dimensions.
    pub fn projection(config: CameraConfig) -> Self {
        let w = (-config.view_direction).normalize();
        let u = config.up.cross(w).normalize();
        let v = w.cross(u).normalize();

        Self {
            origin: config.eye,
            u,
            v,
            w,
            distance: config.projection_distance,
            view_width: config.view_width,
            view_height: config.view_height,
            lens_radius: 0.0,
            fit_to_image: true,
        }
    }

    /// Camera aimed from `look_from` at `look_at`.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aperture`: lens diameter, 0 for a pinhole
    /// - `focus_dist`: distance to the plane of perfect focus
    ///
    /// The window keeps `aspect` when the camera is handed to a scene, so
    /// pass the image's own aspect ratio to avoid stretching.
    pub fn look_at(look_from: Vec3, look_at: Vec3, vup: Vec3, vfov: f32, aspect: f32, aperture: f32, focus_dist: f32) -> Self {
        let half_height = (vfov.to_radians() / 2.0).tan();
        let view_height = 2.0 * half_height * focus_dist;

        let mut camera = Self::projection(CameraConfig {
            eye: look_from,
            view_direction: look_at - look_from,
            up: vup,
            projection_distance: focus_dist,
            view_width: view_height * aspect,
            view_height,
        });
        camera.lens_radius = aperture / 2.0;
        camera.fit_to_image = false;
        camera
    }

    /// Reshape the view window to an image's aspect ratio.
    ///
    /// The extent along the image's longer side is kept and the other side
    /// is derived from it.
    pub fn fit_aspect(&mut self, width: u32, height: u32) {
        let aspect = width as f32 / height as f32;
        if width > height {
            self.view_height = self.view_width / aspect;
        } else {
            self.view_width = self.view_height * aspect;
        }
    }

    /// Whether a scene should reshape this camera's window with
    /// `fit_aspect`. True for projection cameras only.
    pub fn fits_image_aspect(&self) -> bool {
        self.fit_to_image
    }

    /// Ray through the view window.
    ///
    /// `s` and `t` run from 0 to 1 across the window, starting at its
    /// lower-left corner.
    pub fn ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let target = self.origin
            + (s - 0.5) * self.view_width * self.u
            + (t - 0.5) * self.view_height * self.v
            - self.distance * self.w;

        let origin = if self.lens_radius > 0.0 {
            let rd = self.lens_radius * random_in_unit_disk(rng);
            self.origin + self.u * rd.x + self.v * rd.y
        } else {
            self.origin
        };

        Ray::new(origin, (target - origin).normalize())
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }

    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_basis() {
        let camera = Camera::default();
        let (u, v, w) = camera.basis();

        assert!((u - Vec3::X).length() < 1e-6);
        assert!((v - Vec3::Y).length() < 1e-6);
        assert!((w - Vec3::Z).length() < 1e-6);
        assert_eq!(camera.origin(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_center_ray_follows_view_direction() {
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(0);
        let ray = camera.ray(0.5, 0.5, &mut rng);

        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 1.0));
        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays() {
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(0);

        let lower_left = camera.ray(0.0, 0.0, &mut rng).direction();
        assert!(lower_left.x < 0.0 && lower_left.y < 0.0);

        let upper_right = camera.ray(1.0, 1.0, &mut rng).direction();
        let expected = Vec3::new(0.5, 0.5, -1.0).normalize();
        assert!((upper_right - expected).length() < 1e-6);
    }

    #[test]
    fn test_fit_aspect_wide_and_tall() {
        let mut wide = Camera::default();
        wide.fit_aspect(400, 200);
        assert_eq!(wide.view_width(), 1.0);
        assert_eq!(wide.view_height(), 0.5);

        let mut tall = Camera::default();
        tall.fit_aspect(200, 400);
        assert_eq!(tall.view_height(), 1.0);
        assert_eq!(tall.view_width(), 0.5);
    }

    #[test]
    fn test_only_projection_cameras_follow_the_image() {
        assert!(Camera::default().fits_image_aspect());
        let aimed = Camera::look_at(Vec3::ZERO, -Vec3::Z, Vec3::Y, 90.0, 2.0, 0.0, 1.0);
        assert!(!aimed.fits_image_aspect());
    }

    #[test]
    fn test_look_at_field_of_view() {
        let camera = Camera::look_at(Vec3::ZERO, -Vec3::Z, Vec3::Y, 90.0, 2.0, 0.0, 1.0);
        assert!((camera.view_height() - 2.0).abs() < 1e-5);
        assert!((camera.view_width() - 4.0).abs() < 1e-5);

        let mut rng = StdRng::seed_from_u64(0);
        let top = camera.ray(0.5, 1.0, &mut rng).direction();
        // 45 degrees above the axis at the top edge
        assert!((top - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn test_defocus_jitters_origin_within_lens() {
        let camera = Camera::look_at(Vec3::ZERO, -Vec3::Z, Vec3::Y, 40.0, 1.0, 0.5, 4.0);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let ray = camera.ray(0.5, 0.5, &mut rng);
            assert!(ray.origin().length() < 0.25);
            // Every ray still passes through the focus point
            let t = 4.0 / -ray.direction().z;
            assert!(ray.at(t).truncate().length() < 1e-3);
        }
    }
}
