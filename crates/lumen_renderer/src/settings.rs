//! Render settings, loadable from JSON.

use crate::SceneError;
use lumen_math::{linear_blend, Color, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Maximum number of scatter bounces before a path is cut off as black.
pub const DEPTH_LIMIT: u32 = 10;

/// Largest accepted antialiasing factor (65536 samples per pixel).
pub const MAX_ANTIALIASING: u32 = 256;

/// Color returned for rays that leave the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Background {
    Solid { color: Color },

    /// Vertical blend on the ray's unit direction, `bottom` looking straight
    /// down and `top` straight up.
    Gradient { bottom: Color, top: Color },
}

impl Background {
    /// White to light blue sky.
    pub const SKY: Background = Background::Gradient {
        bottom: Vec3::ONE,
        top: Vec3::new(0.5, 0.7, 1.0),
    };

    pub fn color(&self, ray: &Ray) -> Color {
        match *self {
            Background::Solid { color } => color,
            Background::Gradient { bottom, top } => {
                let unit = ray.direction().normalize();
                linear_blend(bottom, top, 0.5 * (unit.y + 1.0))
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid {
            color: Color::splat(0.02),
        }
    }
}

/// Image and sampling parameters for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel is this squared
    pub antialiasing_factor: u32,
    pub depth_limit: u32,
    /// 1.0 leaves colors linear
    pub gamma: f32,
    pub background: Background,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            antialiasing_factor: 1,
            depth_limit: DEPTH_LIMIT,
            gamma: 1.0,
            background: Background::default(),
        }
    }
}

impl RenderSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_antialiasing(mut self, factor: u32) -> Self {
        self.antialiasing_factor = factor;
        self
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.antialiasing_factor == 0 || self.antialiasing_factor > MAX_ANTIALIASING {
            return Err(SceneError::InvalidAntialiasing(self.antialiasing_factor));
        }
        Ok(())
    }

    pub fn samples_per_pixel(&self) -> u64 {
        u64::from(self.antialiasing_factor) * u64::from(self.antialiasing_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.depth_limit, 10);
        assert_eq!(settings.antialiasing_factor, 1);
        assert_eq!(settings.background, Background::Solid { color: Color::splat(0.02) });
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = RenderSettings::from_json(r#"{"width": 64, "height": 32, "antialiasing_factor": 3}"#).unwrap();
        assert_eq!(settings.width, 64);
        assert_eq!(settings.height, 32);
        assert_eq!(settings.samples_per_pixel(), 9);
        assert_eq!(settings.gamma, 1.0);
    }

    #[test]
    fn test_from_json_gradient_background() {
        let json = r#"{
            "background": {"type": "Gradient", "bottom": [1.0, 1.0, 1.0], "top": [0.5, 0.7, 1.0]}
        }"#;
        let settings = RenderSettings::from_json(json).unwrap();
        assert_eq!(settings.background, Background::SKY);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            RenderSettings::from_json(r#"{"width": 0}"#),
            Err(SceneError::InvalidDimensions { width: 0, .. })
        ));
        assert!(matches!(
            RenderSettings::from_json(r#"{"antialiasing_factor": 0}"#),
            Err(SceneError::InvalidAntialiasing(0))
        ));
        assert!(matches!(
            RenderSettings::from_json(r#"{"antialiasing_factor": 70000}"#),
            Err(SceneError::InvalidAntialiasing(70000))
        ));
        assert!(matches!(
            RenderSettings::from_json("{not json"),
            Err(SceneError::Settings(_))
        ));
    }

    #[test]
    fn test_antialiasing_upper_bound() {
        let largest = RenderSettings::new(4, 4).with_antialiasing(MAX_ANTIALIASING);
        assert!(largest.validate().is_ok());
        assert_eq!(largest.samples_per_pixel(), 65536);

        let too_large = RenderSettings::new(4, 4).with_antialiasing(MAX_ANTIALIASING + 1);
        assert!(matches!(too_large.validate(), Err(SceneError::InvalidAntialiasing(257))));
    }

    #[test]
    fn test_sky_gradient() {
        let up = Background::SKY.color(&Ray::new(Vec3::ZERO, Vec3::Y));
        let down = Background::SKY.color(&Ray::new(Vec3::ZERO, -Vec3::Y));
        let level = Background::SKY.color(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -3.0)));

        assert!((up - Vec3::new(0.5, 0.7, 1.0)).length() < 1e-6);
        assert!((down - Vec3::ONE).length() < 1e-6);
        assert!((level - Vec3::new(0.75, 0.85, 1.0)).length() < 1e-6);
    }
}
