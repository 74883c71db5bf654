//! Lumen Renderer - recursive CPU ray tracing.
//!
//! Surfaces live in object space behind a `Transform` triple, respond to
//! light through a `Response` (stochastic scatter materials or direct
//! illumination shaders), and are searched as a flat list. `ray_color` is
//! the recursive resolver; `render` drives it over a `PixelSink`.

mod camera;
mod error;
mod group;
mod light;
mod material;
mod renderer;
mod response;
mod sampling;
mod scene;
mod settings;
mod shader;
mod sphere;
mod surface;
mod timing;
mod world;

pub use camera::{Camera, CameraConfig};
pub use error::SceneError;
pub use group::{Group, Node};
pub use light::Light;
pub use material::{Material, ScatterResult};
pub use renderer::{color_to_rgba, ray_color, render, render_pixel, ImageBuffer, PixelSink};
pub use response::Response;
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere};
pub use scene::Scene;
pub use settings::{Background, RenderSettings, DEPTH_LIMIT, MAX_ANTIALIASING};
pub use shader::Shader;
pub use sphere::Sphere;
pub use surface::{HitRecord, LocalHit, Surface, Transform};
pub use timing::{RenderStats, Stopwatch};
pub use world::World;

/// Re-export the math types the public API is written in
pub use lumen_math::{Color, ColorExt, Interval, MathError, Matrix, Ray, Vec3, VectorExt};
