//! Ray tracing helpers on top of `glam::Vec3`.
//!
//! glam already provides the value-returning arithmetic (`a + b`, `v * t`,
//! `a.cross(b)`) and the in-place forms (`+=`, `*=`, `/=`). Nothing here
//! mutates its receiver.
//!
//! `Vec3::normalize` on a zero-length vector yields a NaN vector; use
//! `Vec3::try_normalize` when the input may be degenerate.

use glam::Vec3;

/// Extension trait adding reflection and refraction to `Vec3`.
pub trait VectorExt {
    /// Reflect this vector about the unit normal `n`.
    fn reflect_about(self, n: Vec3) -> Vec3;

    /// Refract this vector through a boundary with unit normal `n`.
    ///
    /// `ratio` is the ratio of refractive indices (incident over transmitted).
    /// Returns `None` on total internal reflection, which is an expected
    /// outcome rather than an error.
    fn refract_through(self, n: Vec3, ratio: f32) -> Option<Vec3>;
}

impl VectorExt for Vec3 {
    #[inline]
    fn reflect_about(self, n: Vec3) -> Vec3 {
        self - 2.0 * self.dot(n) * n
    }

    fn refract_through(self, n: Vec3, ratio: f32) -> Option<Vec3> {
        let uv = self.normalize();
        let dt = uv.dot(n);
        let discriminant = 1.0 - ratio * ratio * (1.0 - dt * dt);

        if discriminant > 0.0 {
            Some(ratio * (uv - n * dt) - n * discriminant.sqrt())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_flips_normal_component() {
        let normals = [
            Vec3::Y,
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(-0.3, 0.5, 0.8).normalize(),
        ];
        let vectors = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.2, 3.0, -4.0),
            Vec3::new(-5.0, 0.1, 0.7),
        ];

        for n in normals {
            for v in vectors {
                let r = v.reflect_about(n);
                assert!((r.dot(n) + v.dot(n)).abs() < 1e-4);
                // Reflection preserves length
                assert!((r.length() - v.length()).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_normalize_gives_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.001, 0.002, 0.0005),
            Vec3::new(100.0, -250.0, 12.5),
        ] {
            assert!((v.normalize().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_is_degenerate() {
        assert!(Vec3::ZERO.normalize().is_nan());
        assert!(Vec3::ZERO.try_normalize().is_none());
    }

    #[test]
    fn test_refract_straight_through() {
        // Head-on ray does not bend regardless of the ratio
        let refracted = Vec3::new(0.0, -1.0, 0.0)
            .refract_through(Vec3::Y, 1.0 / 1.5)
            .unwrap();
        assert!((refracted - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let refracted = incoming.refract_through(Vec3::Y, 1.0 / 1.5).unwrap();

        // Entering a denser medium: smaller tangential component
        let tangential_in = incoming.normalize().x;
        assert!(refracted.x < tangential_in);
        assert!(refracted.y < 0.0);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Grazing ray leaving glass into air
        let incoming = Vec3::new(1.0, -0.1, 0.0);
        assert!(incoming.refract_through(Vec3::Y, 1.5).is_none());
    }
}
