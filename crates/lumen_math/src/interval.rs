/// Closed range `[min, max]`, used for valid ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// `[0, 1]`, the range of a displayable color channel.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Both ends included. NaN is never contained.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let window = Interval::new(1e-3, 4.0);

        assert!(window.contains(1e-3));
        assert!(window.contains(4.0));
        assert!(!window.contains(0.0));
        assert!(!window.contains(4.001));
        assert!(!window.contains(f32::NAN));
    }

    #[test]
    fn test_open_ended_window() {
        let window = Interval::new(1e-3, f32::INFINITY);
        assert!(window.contains(1e30));
    }

    #[test]
    fn test_unit_clamp() {
        assert_eq!(Interval::UNIT.clamp(-0.5), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.25), 0.25);
        assert_eq!(Interval::UNIT.clamp(3.0), 1.0);
    }
}
