//! Scene assembly and intersection queries.

use crate::{Background, Camera, Group, HitRecord, Light, RenderSettings, SceneError, Surface, Transform, World};
use lumen_math::{Matrix, Ray, Vec3};

/// Everything a render needs: surfaces, lights, camera and settings.
///
/// A scene is built up and then sealed once with `finalize_setup`; after
/// that it can only be queried.
pub struct Scene {
    world: World,
    lights: Vec<Light>,
    camera: Camera,
    settings: RenderSettings,
    finalized: bool,
}

impl Scene {
    /// Create an empty scene. A projection camera's view window is
    /// reshaped to the image's aspect ratio; look-at cameras keep the field
    /// of view they were built with.
    pub fn new(settings: RenderSettings, mut camera: Camera) -> Result<Self, SceneError> {
        settings.validate()?;
        if camera.fits_image_aspect() {
            camera.fit_aspect(settings.width, settings.height);
        }

        Ok(Self {
            world: World::new(),
            lights: Vec::new(),
            camera,
            settings,
            finalized: false,
        })
    }

    /// Add a surface in world space.
    pub fn add_surface(&mut self, mut surface: impl Surface + 'static) -> Result<&mut Self, SceneError> {
        self.ensure_open()?;
        surface.set_transform(Transform::IDENTITY);
        self.world.add(Box::new(surface));
        Ok(self)
    }

    /// Flatten a group hierarchy into the scene.
    pub fn add_group(&mut self, group: Group) -> Result<&mut Self, SceneError> {
        self.ensure_open()?;
        let surfaces = group.resolve(&Matrix::IDENTITY).map_err(|err| {
            log::warn!("Rejected group with unusable transform: {}", err);
            err
        })?;

        log::debug!("Flattened group into {} surfaces", surfaces.len());
        for surface in surfaces {
            self.world.add(surface);
        }
        Ok(self)
    }

    pub fn add_light(&mut self, light: Light) -> Result<&mut Self, SceneError> {
        self.ensure_open()?;
        self.lights.push(light);
        Ok(self)
    }

    /// Seal the scene for rendering. Can only happen once.
    pub fn finalize_setup(&mut self) -> Result<&mut Self, SceneError> {
        self.ensure_open()?;
        self.finalized = true;

        // Surfaces are searched as a flat list; no acceleration structure yet
        log::debug!(
            "Scene finalized: {} surfaces, {} lights",
            self.world.len(),
            self.lights.len()
        );
        Ok(self)
    }

    pub fn is_ready_for_rendering(&self) -> bool {
        self.finalized
    }

    fn ensure_open(&self) -> Result<(), SceneError> {
        if self.finalized {
            Err(SceneError::AlreadyFinalized)
        } else {
            Ok(())
        }
    }

    pub fn closest_intersection(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.world.closest_intersection(ray)
    }

    pub fn any_intersection(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        self.world.any_intersection(ray)
    }

    /// Whether anything sits between `point` and the light.
    pub fn is_shadowed(&self, point: Vec3, light: &Light) -> bool {
        self.any_intersection(&light.shadow_ray(point)).is_some()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn width(&self) -> u32 {
        self.settings.width
    }

    pub fn height(&self) -> u32 {
        self.settings.height
    }

    pub fn background(&self) -> &Background {
        &self.settings.background
    }

    pub fn antialiasing_factor(&self) -> u32 {
        self.settings.antialiasing_factor
    }

    pub fn depth_limit(&self) -> u32 {
        self.settings.depth_limit
    }

    pub fn gamma(&self) -> f32 {
        self.settings.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Response, Shader, Sphere};
    use lumen_math::Color;

    fn matte() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Response::shared(Shader::lambertian(Color::ONE)))
    }

    fn scene() -> Scene {
        Scene::new(RenderSettings::new(4, 4), Camera::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_settings() {
        let result = Scene::new(RenderSettings::new(0, 10), Camera::default());
        assert!(matches!(result, Err(SceneError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_new_fits_camera() {
        let scene = Scene::new(RenderSettings::new(200, 100), Camera::default()).unwrap();
        assert_eq!(scene.camera().view_width(), 1.0);
        assert_eq!(scene.camera().view_height(), 0.5);
    }

    #[test]
    fn test_new_keeps_look_at_field_of_view() {
        let camera = Camera::look_at(Vec3::ZERO, -Vec3::Z, Vec3::Y, 90.0, 1.0, 0.0, 1.0);
        let scene = Scene::new(RenderSettings::new(200, 100), camera).unwrap();

        assert!((scene.camera().view_width() - 2.0).abs() < 1e-5);
        assert!((scene.camera().view_height() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_finalize_only_once() {
        let mut scene = scene();
        assert!(!scene.is_ready_for_rendering());

        scene.finalize_setup().unwrap();
        assert!(scene.is_ready_for_rendering());
        assert!(matches!(scene.finalize_setup(), Err(SceneError::AlreadyFinalized)));
    }

    #[test]
    fn test_sealed_scene_rejects_additions() {
        let mut scene = scene();
        scene.finalize_setup().unwrap();

        assert!(matches!(scene.add_surface(matte()), Err(SceneError::AlreadyFinalized)));
        assert!(matches!(
            scene.add_light(Light::new(Vec3::Y, Color::ONE)),
            Err(SceneError::AlreadyFinalized)
        ));
        assert!(matches!(scene.add_group(Group::new()), Err(SceneError::AlreadyFinalized)));
        assert!(scene.world().is_empty());
    }

    #[test]
    fn test_add_surface_resets_transform() {
        let mut surface = matte();
        surface.set_transform(Transform::from_matrix(Matrix::translation(Vec3::new(5.0, 0.0, 0.0))).unwrap());

        let mut scene = scene();
        scene.add_surface(surface).unwrap();

        let hit = scene.closest_intersection(&Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z));
        assert!((hit.unwrap().t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_add_group_flattens() {
        let group = Group::new()
            .translate(Vec3::new(0.0, 0.0, -3.0))
            .with_surface(matte())
            .with_group(Group::new().translate(Vec3::new(0.0, 3.0, 0.0)).with_surface(matte()));

        let mut scene = scene();
        scene.add_group(group).unwrap().finalize_setup().unwrap();
        assert_eq!(scene.world().len(), 2);

        let upper = scene.closest_intersection(&Ray::new(Vec3::new(0.0, 3.0, 0.0), -Vec3::Z));
        assert!((upper.unwrap().t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_singular_group_is_rejected() {
        let mut scene = scene();
        let flat = Group::new().scale(Vec3::new(0.0, 1.0, 1.0)).with_surface(matte());

        assert!(matches!(scene.add_group(flat), Err(SceneError::Transform(_))));
        assert!(scene.world().is_empty());
    }

    #[test]
    fn test_shadow_query() {
        let mut scene = scene();
        scene
            .add_surface(Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5, Response::shared(Material::lambertian(Color::ONE))))
            .unwrap()
            .finalize_setup()
            .unwrap();

        let above = Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE);
        let beside = Light::new(Vec3::new(5.0, 0.0, 0.0), Color::ONE);
        let below_blocker = Light::new(Vec3::new(0.0, 1.0, 0.0), Color::ONE);

        assert!(scene.is_shadowed(Vec3::ZERO, &above));
        assert!(!scene.is_shadowed(Vec3::ZERO, &beside));
        // Blocker lies past the light
        assert!(!scene.is_shadowed(Vec3::ZERO, &below_blocker));
    }
}
