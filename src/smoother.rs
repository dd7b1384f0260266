//! Motion smoothing stage between the signal filter and the camera mapping.
//!
//! Adds a second, independent smoothing pass: a critically-damped exponential
//! approach toward the filtered target, clamped to the normalized viewing
//! window. The filter upstream removes detector jitter; this stage adds the
//! cinematic lag that keeps the virtual camera from ever snapping.

use crate::constants::{DEFAULT_LERP_FACTOR, LERP_FACTOR_MAX, LERP_FACTOR_MIN, POSITION_MAX, POSITION_MIN};

/// Exponential interpolation with bounded output
pub struct MotionSmoother {
    lerp_factor: f64,
    x: f64,
    y: f64,
}

impl MotionSmoother {
    /// Create a smoother at the origin.
    ///
    /// `lerp_factor` is clamped to the supported range rather than rejected.
    #[must_use]
    pub fn new(lerp_factor: f64) -> Self {
        Self {
            lerp_factor: lerp_factor.clamp(LERP_FACTOR_MIN, LERP_FACTOR_MAX),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Advance one step toward the target, once per rendered frame
    pub fn update(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        if target_x.is_finite() {
            self.x += (target_x - self.x) * self.lerp_factor;
        }
        if target_y.is_finite() {
            self.y += (target_y - self.y) * self.lerp_factor;
        }
        self.x = self.x.clamp(POSITION_MIN, POSITION_MAX);
        self.y = self.y.clamp(POSITION_MIN, POSITION_MAX);
        (self.x, self.y)
    }

    /// Current interpolated position
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Set the interpolation factor, clamped silently to the valid range
    pub fn set_lerp_factor(&mut self, lerp_factor: f64) {
        self.lerp_factor = lerp_factor.clamp(LERP_FACTOR_MIN, LERP_FACTOR_MAX);
    }

    /// Current interpolation factor
    #[must_use]
    pub const fn lerp_factor(&self) -> f64 {
        self.lerp_factor
    }

    /// Snap both axes back to the origin immediately
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }
}

impl Default for MotionSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_LERP_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_approach() {
        let mut smoother = MotionSmoother::new(0.5);
        let (x, y) = smoother.update(1.0, -1.0);
        assert_eq!(x, 0.5);
        assert_eq!(y, -0.5);
        let (x, y) = smoother.update(1.0, -1.0);
        assert_eq!(x, 0.75);
        assert_eq!(y, -0.75);
    }

    #[test]
    fn test_output_stays_bounded() {
        let mut smoother = MotionSmoother::new(0.5);
        for _ in 0..100 {
            let (x, y) = smoother.update(50.0, -50.0);
            assert!((-1.0..=1.0).contains(&x));
            assert!((-1.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn test_lerp_factor_clamped() {
        let mut smoother = MotionSmoother::new(3.0);
        assert_eq!(smoother.lerp_factor(), 0.5);
        smoother.set_lerp_factor(0.0);
        assert_eq!(smoother.lerp_factor(), 0.01);
    }

    #[test]
    fn test_reset_snaps_to_origin() {
        let mut smoother = MotionSmoother::default();
        smoother.update(1.0, 1.0);
        smoother.reset();
        assert_eq!(smoother.position(), (0.0, 0.0));
    }

    #[test]
    fn test_non_finite_target_ignored() {
        let mut smoother = MotionSmoother::new(0.5);
        smoother.update(0.8, 0.8);
        let (x, y) = smoother.update(f64::NAN, f64::INFINITY);
        assert_eq!(x, 0.4);
        assert_eq!(y, 0.4);
    }
}
