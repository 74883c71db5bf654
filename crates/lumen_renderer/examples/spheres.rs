//! Render the two demo scenes and save them as PNG.
//!
//! Run with: cargo run --example spheres -- [settings.json]
//!
//! The optional JSON file overrides the render settings of both scenes,
//! e.g. `{"width": 800, "height": 400, "antialiasing_factor": 4}`.

use std::env;
use std::fs;

use anyhow::{Context, Result};
use lumen_renderer::{
    render, Background, Camera, CameraConfig, Color, Group, ImageBuffer, Light, Material, RenderSettings, Response,
    Scene, Shader, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    env_logger::init();

    let overrides = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            Some(RenderSettings::from_json(&json)?)
        }
        None => None,
    };

    let mut rng = StdRng::seed_from_u64(2024);

    let settings = overrides.unwrap_or_else(|| {
        RenderSettings::new(400, 200)
            .with_antialiasing(4)
            .with_gamma(2.0)
            .with_background(Background::SKY)
    });
    let scene = scatter_scene(settings)?;
    save(&scene, "scatter.png", &mut rng)?;

    let settings = overrides.unwrap_or_else(|| RenderSettings::new(400, 400).with_antialiasing(2));
    let scene = shader_scene(settings)?;
    save(&scene, "shaded.png", &mut rng)?;

    Ok(())
}

/// Ground, diffuse, metal and a hollow glass sphere lit by the sky.
fn scatter_scene(settings: RenderSettings) -> Result<Scene> {
    let aspect = settings.width as f32 / settings.height as f32;
    let camera = Camera::look_at(
        Vec3::new(-2.0, 2.0, 1.0),
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::Y,
        40.0,
        aspect,
        0.1,
        (Vec3::new(-2.0, 2.0, 1.0) - Vec3::new(0.0, 0.0, -1.0)).length(),
    );

    let glass = Response::shared(Material::dielectric(1.5));
    let mut scene = Scene::new(settings, camera)?;
    scene
        .add_surface(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Response::shared(Material::lambertian(Color::new(0.1, 0.2, 0.5))),
        ))?
        .add_surface(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Response::shared(Material::lambertian(Color::new(0.8, 0.8, 0.0))),
        ))?
        .add_surface(Sphere::new(
            Vec3::new(1.0, 0.0, -1.0),
            0.5,
            Response::shared(Material::metal(Color::new(0.8, 0.6, 0.2), 0.3)),
        ))?
        .add_surface(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, glass.clone()))?
        .add_surface(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), -0.45, glass))?
        .finalize_setup()?;

    Ok(scene)
}

/// Phong and Lambertian spheres arranged through a transformed group.
fn shader_scene(settings: RenderSettings) -> Result<Scene> {
    let camera = Camera::projection(CameraConfig {
        eye: Vec3::new(0.0, 0.0, 6.0),
        ..CameraConfig::default()
    });

    let shiny = Response::shared(Shader::phong(Color::new(0.2, 0.3, 0.8), Color::splat(0.6), 64.0));
    let matte = Response::shared(Shader::lambertian(Color::new(0.8, 0.3, 0.2)));

    let ring = Group::new()
        .with_surface(Sphere::new(Vec3::new(1.5, 0.0, 0.0), 0.5, matte.clone()))
        .with_surface(Sphere::new(Vec3::new(-1.5, 0.0, 0.0), 0.5, matte))
        .rotate(Vec3::new(30.0, 0.0, 20.0));

    let stretched = Group::new()
        .with_surface(Sphere::new(Vec3::ZERO, 1.0, shiny))
        .scale(Vec3::new(1.0, 0.6, 1.0));

    let mut scene = Scene::new(settings, camera)?;
    scene
        .add_group(Group::new().translate(Vec3::new(0.0, 0.3, 0.0)).with_group(ring).with_group(stretched))?
        .add_light(Light::new(Vec3::new(5.0, 5.0, 5.0), Color::splat(0.8)))?
        .add_light(Light::new(Vec3::new(-5.0, 2.0, 3.0), Color::splat(0.3)))?
        .finalize_setup()?;

    Ok(scene)
}

fn save(scene: &Scene, path: &str, rng: &mut StdRng) -> Result<()> {
    let mut image = ImageBuffer::new(scene.width(), scene.height());
    let stats = render(scene, &mut image, rng)?;

    image::save_buffer(path, &image.to_rgba(), image.width, image.height, image::ColorType::Rgba8)
        .with_context(|| format!("saving {}", path))?;

    println!("Saved {} ({} samples in {:.2?})", path, stats.samples, stats.elapsed);
    Ok(())
}
