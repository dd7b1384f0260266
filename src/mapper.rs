//! Position-to-camera mapping for the parallax window effect.
//!
//! The mapper is the per-frame entry point the rendering host calls with the
//! latest head-position estimate. It owns the two-stage smoothing pipeline
//! (per-axis adaptive filter, then exponential interpolation) and turns the
//! smoothed position into a camera translation plus an optional asymmetric
//! frustum shift. It never renders anything itself.

use crate::constants::{
    DEFAULT_SENSITIVITY, FRUSTUM_SHIFT_X, FRUSTUM_SHIFT_Y, SENSITIVITY_MAX, SENSITIVITY_MIN,
    VERTICAL_DAMPING,
};
use crate::filters::one_euro::OneEuroFilter2D;
use crate::smoother::MotionSmoother;

/// Virtual-camera translation, in the renderer's neutral-frustum units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOffset {
    /// Horizontal translation
    pub x: f64,
    /// Vertical translation
    pub y: f64,
}

/// Per-edge deltas to apply against a fixed neutral frustum.
///
/// Both horizontal edges carry the same delta (likewise vertical): an
/// off-axis projection translates the viewing window, it does not scale it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumShift {
    /// Left edge delta
    pub left: f64,
    /// Right edge delta
    pub right: f64,
    /// Top edge delta
    pub top: f64,
    /// Bottom edge delta
    pub bottom: f64,
}

impl FrustumShift {
    /// Build the per-edge deltas from a window translation
    #[must_use]
    pub const fn from_shift(shift_x: f64, shift_y: f64) -> Self {
        Self {
            left: shift_x,
            right: shift_x,
            top: shift_y,
            bottom: shift_y,
        }
    }

    /// Horizontal window translation
    #[must_use]
    pub const fn shift_x(&self) -> f64 {
        self.left
    }

    /// Vertical window translation
    #[must_use]
    pub const fn shift_y(&self) -> f64 {
        self.top
    }
}

/// One frame of output for the rendering host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    /// Camera translation to apply this frame
    pub camera: CameraOffset,
    /// Frustum deltas, present only when off-axis projection is enabled
    pub frustum: Option<FrustumShift>,
}

/// Maps smoothed head position to camera offset and frustum shift
pub struct ParallaxMapper {
    filters: OneEuroFilter2D,
    smoother: MotionSmoother,
    sensitivity: f64,
    off_axis: bool,
}

impl ParallaxMapper {
    /// Create a mapper with default filter tuning.
    ///
    /// `sensitivity` and `lerp_factor` are clamped to their supported ranges.
    #[must_use]
    pub fn new(sensitivity: f64, lerp_factor: f64, off_axis: bool) -> Self {
        Self::with_filters(OneEuroFilter2D::default(), sensitivity, lerp_factor, off_axis)
    }

    /// Create a mapper around an explicitly tuned filter pair
    #[must_use]
    pub fn with_filters(filters: OneEuroFilter2D, sensitivity: f64, lerp_factor: f64, off_axis: bool) -> Self {
        Self {
            filters,
            smoother: MotionSmoother::new(lerp_factor),
            sensitivity: sensitivity.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX),
            off_axis,
        }
    }

    /// Process one head-position sample and produce this frame's output.
    ///
    /// `timestamp` is in seconds and feeds the adaptive filter; `None` uses a
    /// monotonic clock.
    pub fn update(&mut self, head_x: f64, head_y: f64, timestamp: Option<f64>) -> ParallaxFrame {
        let (fx, fy) = self.filters.filter(head_x, head_y, timestamp);
        let (sx, sy) = self.smoother.update(fx, fy);
        self.map(sx, sy)
    }

    /// Pure mapping from a smoothed position to camera and frustum values.
    ///
    /// The camera translation opposes the head movement; vertical sensitivity
    /// is halved so head bob moves the view less than head turn. The frustum
    /// shift is a subtle perspective correction, tuned far below the camera
    /// translation, which remains the dominant parallax cue.
    #[must_use]
    pub fn map(&self, smoothed_x: f64, smoothed_y: f64) -> ParallaxFrame {
        let camera = CameraOffset {
            x: -smoothed_x * self.sensitivity,
            y: -smoothed_y * self.sensitivity * VERTICAL_DAMPING,
        };
        let frustum = self.off_axis.then(|| {
            FrustumShift::from_shift(smoothed_x * FRUSTUM_SHIFT_X, smoothed_y * FRUSTUM_SHIFT_Y)
        });
        ParallaxFrame { camera, frustum }
    }

    /// Current smoothed position driving the mapping
    #[must_use]
    pub const fn smoothed_position(&self) -> (f64, f64) {
        self.smoother.position()
    }

    /// Set the parallax sensitivity, clamped silently to `[0.5, 5.0]`
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.sensitivity = sensitivity.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
    }

    /// Current parallax sensitivity
    #[must_use]
    pub const fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Set the smoother's interpolation factor
    pub fn set_lerp_factor(&mut self, lerp_factor: f64) {
        self.smoother.set_lerp_factor(lerp_factor);
    }

    /// Enable or disable the off-axis frustum output
    pub fn set_off_axis(&mut self, enabled: bool) {
        self.off_axis = enabled;
    }

    /// Snap the smoothed position back to center.
    ///
    /// Filter history and confidence state are left untouched; use
    /// [`recenter`](Self::recenter) to also clear filter history.
    pub fn reset(&mut self) {
        self.smoother.reset();
    }

    /// Full re-center: smoothed position to origin and filter history cleared
    pub fn recenter(&mut self) {
        self.smoother.reset();
        self.filters.reset();
    }
}

impl Default for ParallaxMapper {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY, crate::constants::DEFAULT_LERP_FACTOR, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_mapping_sign() {
        let mapper = ParallaxMapper::new(2.0, 0.1, false);
        let frame = mapper.map(0.5, 0.2);
        assert!((frame.camera.x - -1.0).abs() < 1e-12);
        assert!((frame.camera.y - -0.2).abs() < 1e-12);
        assert!(frame.frustum.is_none());
    }

    #[test]
    fn test_frustum_shift_translates_window() {
        let mapper = ParallaxMapper::new(2.0, 0.1, true);
        let frame = mapper.map(0.4, -0.8);
        let frustum = frame.frustum.unwrap();
        assert!((frustum.shift_x() - 0.2).abs() < 1e-12);
        assert!((frustum.shift_y() - -0.2).abs() < 1e-12);
        assert_eq!(frustum.left, frustum.right);
        assert_eq!(frustum.top, frustum.bottom);
    }

    #[test]
    fn test_sensitivity_clamped() {
        let mut mapper = ParallaxMapper::new(10.0, 0.1, false);
        assert_eq!(mapper.sensitivity(), 5.0);
        mapper.set_sensitivity(0.1);
        assert_eq!(mapper.sensitivity(), 0.5);
    }

    #[test]
    fn test_reset_recenters_smoother_only() {
        let mut mapper = ParallaxMapper::new(2.0, 0.5, false);
        mapper.update(0.8, 0.8, Some(0.0));
        mapper.update(0.8, 0.8, Some(1.0 / 60.0));
        assert_ne!(mapper.smoothed_position(), (0.0, 0.0));
        mapper.reset();
        assert_eq!(mapper.smoothed_position(), (0.0, 0.0));
    }

    #[test]
    fn test_update_output_bounded() {
        let mut mapper = ParallaxMapper::new(5.0, 0.5, true);
        for i in 0..200 {
            let t = f64::from(i) / 60.0;
            let frame = mapper.update(3.0, -3.0, Some(t));
            // Smoothed position stays in [-1, 1] so camera stays in ±sensitivity
            assert!(frame.camera.x.abs() <= 5.0);
            assert!(frame.camera.y.abs() <= 2.5);
        }
    }
}
