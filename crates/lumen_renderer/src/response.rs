//! How a surface answers an incoming ray.

use std::sync::Arc;

use crate::{Material, Shader};

/// The two response models a surface can carry.
///
/// `Scatter` materials continue the path with a new ray; `Shade` shaders
/// compute a final color from the scene's lights without recursing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    Scatter(Material),
    Shade(Shader),
}

impl Response {
    /// Wrap a material or shader for sharing between surfaces.
    pub fn shared(response: impl Into<Response>) -> Arc<Response> {
        Arc::new(response.into())
    }
}

impl From<Material> for Response {
    fn from(material: Material) -> Self {
        Response::Scatter(material)
    }
}

impl From<Shader> for Response {
    fn from(shader: Shader) -> Self {
        Response::Shade(shader)
    }
}
