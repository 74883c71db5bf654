//! RGB color helpers.
//!
//! Colors share glam's `Vec3` representation, so the Hadamard product is
//! plain `a * b`. Components are unbounded until `clamp_color` is applied
//! at output time.

use glam::Vec3;

use crate::Interval;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Extension trait for color-only operations on `Vec3`.
pub trait ColorExt {
    /// Absorbed or unlit
    const BLACK: Color = Vec3::ZERO;
    /// Full transmission
    const WHITE: Color = Vec3::ONE;

    /// Raise every channel to `1 / gamma`.
    fn gamma_correct(self, gamma: f32) -> Color;

    /// Clamp every channel to [0, 1].
    fn clamp_color(self) -> Color;
}

impl ColorExt for Color {
    fn gamma_correct(self, gamma: f32) -> Color {
        let inverse_gamma = 1.0 / gamma;
        Vec3::new(
            self.x.max(0.0).powf(inverse_gamma),
            self.y.max(0.0).powf(inverse_gamma),
            self.z.max(0.0).powf(inverse_gamma),
        )
    }

    fn clamp_color(self) -> Color {
        let unit = Interval::UNIT;
        Vec3::new(unit.clamp(self.x), unit.clamp(self.y), unit.clamp(self.z))
    }
}

/// Blend `(1 - t) * start + t * end`.
#[inline]
pub fn linear_blend(start: Color, end: Color, t: f32) -> Color {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_two_is_sqrt() {
        let c = Color::new(0.25, 1.0, 0.0).gamma_correct(2.0);
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 1.0).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn test_clamp_color() {
        let c = Color::new(-0.5, 0.5, 3.0).clamp_color();
        assert_eq!(c, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_linear_blend_endpoints() {
        let white = Color::WHITE;
        let sky = Color::new(0.5, 0.7, 1.0);

        assert_eq!(linear_blend(white, sky, 0.0), white);
        assert_eq!(linear_blend(white, sky, 1.0), sky);

        let mid = linear_blend(white, sky, 0.5);
        assert!((mid.y - 0.85).abs() < 1e-6);
    }
}
