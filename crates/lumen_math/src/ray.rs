use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and a valid parameter interval.
///
/// Only parameters inside `[t_min, t_max]` count as hits. A closest-hit
/// search shrinks `t_max` every time it accepts a hit, so later surfaces
/// are tested against the narrowed window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    interval: Interval,
}

impl Ray {
    /// Default lower bound of the valid interval. Keeps rays leaving a
    /// surface from re-hitting it (shadow acne).
    pub const EPSILON: f32 = 1e-3;

    /// Create a ray valid over `[EPSILON, +inf]`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_interval(origin, direction, Self::EPSILON, f32::INFINITY)
    }

    /// Create a ray valid over `[t_min, t_max]`.
    pub fn with_interval(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        Self {
            origin,
            direction,
            interval: Interval::new(t_min, t_max),
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Not necessarily unit length.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// `origin + t * direction`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    #[inline]
    pub fn t_min(&self) -> f32 {
        self.interval.min
    }

    #[inline]
    pub fn t_max(&self) -> f32 {
        self.interval.max
    }

    /// The current valid interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// True iff `t_min <= t <= t_max`.
    #[inline]
    pub fn is_valid_t(&self, t: f32) -> bool {
        self.interval.contains(t)
    }

    /// Narrow the far end of the valid interval.
    #[inline]
    pub fn set_t_max(&mut self, t_max: f32) {
        self.interval.max = t_max;
    }
}
