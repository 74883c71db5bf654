//! Recursive color resolution and the pixel loop.
//!
//! Scatter materials recurse up to the scene's depth limit; a path ends
//! black when it is absorbed or runs out of depth. Shaders end the path
//! with direct lighting.

use crate::{RenderStats, Response, Scene, SceneError, Stopwatch};
use lumen_math::{Color, ColorExt, Ray};
use rand::RngCore;

/// Compute the color seen by a ray.
///
/// `depth` counts bounces taken so far; primary rays start at 0.
pub fn ray_color(ray: &Ray, scene: &Scene, depth: u32, rng: &mut dyn RngCore) -> Color {
    let Some(rec) = scene.closest_intersection(ray) else {
        return scene.background().color(ray);
    };

    match rec.response {
        Response::Scatter(material) => {
            if depth >= scene.depth_limit() {
                return Color::BLACK;
            }
            match material.scatter(ray, &rec, rng) {
                Some(result) => result.attenuation * ray_color(&result.scattered, scene, depth + 1, rng),
                None => Color::BLACK,
            }
        }
        Response::Shade(shader) => shader.shade(scene, &rec, ray, depth),
    }
}

/// Render a single pixel with an `n x n` grid of samples.
///
/// Samples sit at sub-cell centers. Row 0 is the top of the image. The
/// averaged color is gamma corrected but not clamped.
pub fn render_pixel(scene: &Scene, x: u32, y: u32, rng: &mut dyn RngCore) -> Color {
    let n = scene.antialiasing_factor();
    let width = scene.width() as f32;
    let height = scene.height() as f32;
    let mut pixel_color = Color::ZERO;

    for j in 0..n {
        for i in 0..n {
            let s = (x as f32 + (i as f32 + 0.5) / n as f32) / width;
            let t = 1.0 - (y as f32 + (j as f32 + 0.5) / n as f32) / height;
            let ray = scene.camera().ray(s, t, rng);
            pixel_color += ray_color(&ray, scene, 0, rng);
        }
    }

    let samples = n as f32 * n as f32;
    (pixel_color / samples).gamma_correct(scene.gamma())
}

/// Destination for rendered pixels.
pub trait PixelSink {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Map a color to 8-bit RGBA.
///
/// Channels are clamped to [0, 1] and mapped with `floor(c * 255.99)`;
/// alpha is always opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = color.clamp_color();
    let r = (c.x * 255.99) as u8;
    let g = (c.y * 255.99) as u8;
    let b = (c.z * 255.99) as u8;
    [r, g, b, 255]
}

/// In-memory sink holding unclamped colors, row-major from the top-left.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Packed 8-bit RGBA, ready for `image::save_buffer`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| color_to_rgba(*color)).collect()
    }
}

impl PixelSink for ImageBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }
}

/// Render the entire scene into a sink, row by row from the top.
///
/// The scene must be finalized and the sink at least as large as the image.
pub fn render(scene: &Scene, sink: &mut dyn PixelSink, rng: &mut dyn RngCore) -> Result<RenderStats, SceneError> {
    if !scene.is_ready_for_rendering() {
        return Err(SceneError::NotFinalized);
    }

    let (width, height) = (scene.width(), scene.height());
    let (sink_width, sink_height) = sink.dimensions();
    if sink_width < width || sink_height < height {
        return Err(SceneError::SinkTooSmall {
            width,
            height,
            sink_width,
            sink_height,
        });
    }

    log::info!(
        "Rendering {}x{} at {} samples per pixel",
        width,
        height,
        scene.settings().samples_per_pixel()
    );

    let mut stopwatch = Stopwatch::new();
    for y in 0..height {
        stopwatch.start();
        for x in 0..width {
            sink.set_pixel(x, y, render_pixel(scene, x, y, rng));
        }
        stopwatch.stop();
    }

    let pixels = u64::from(width) * u64::from(height);
    let stats = RenderStats {
        pixels,
        samples: pixels * scene.settings().samples_per_pixel(),
        elapsed: stopwatch.total(),
    };

    if let Some(per_row) = stopwatch.average() {
        log::info!("Rendered in {:.2?} ({:.2?} per row)", stats.elapsed, per_row);
    }
    Ok(stats)
}
