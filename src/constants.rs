//! Constants used throughout the library

/// Initial assumed sample rate for the adaptive filter (Hz)
pub const DEFAULT_FREQUENCY: f64 = 60.0;

/// Fallback sample interval when elapsed time is zero or negative (seconds)
pub const FALLBACK_DT: f64 = 1.0 / 60.0;

/// Default minimum cutoff frequency for the adaptive filter (Hz)
pub const DEFAULT_MIN_CUTOFF: f64 = 1.0;

/// Default speed sensitivity coefficient for the adaptive filter
pub const DEFAULT_BETA: f64 = 0.007;

/// Default derivative smoothing cutoff for the adaptive filter (Hz)
pub const DEFAULT_D_CUTOFF: f64 = 1.0;

/// Default exponential interpolation factor for the motion smoother
pub const DEFAULT_LERP_FACTOR: f64 = 0.08;

/// Motion smoother interpolation factor bounds
pub const LERP_FACTOR_MIN: f64 = 0.01;
pub const LERP_FACTOR_MAX: f64 = 0.5;

/// Normalized position bounds enforced on the smoothed output
pub const POSITION_MIN: f64 = -1.0;
pub const POSITION_MAX: f64 = 1.0;

/// Default parallax sensitivity and its bounds
pub const DEFAULT_SENSITIVITY: f64 = 2.0;
pub const SENSITIVITY_MIN: f64 = 0.5;
pub const SENSITIVITY_MAX: f64 = 5.0;

/// Vertical camera movement as a fraction of horizontal sensitivity
pub const VERTICAL_DAMPING: f64 = 0.5;

/// Frustum shift factors, tuned well below camera sensitivity
pub const FRUSTUM_SHIFT_X: f64 = 0.5;
pub const FRUSTUM_SHIFT_Y: f64 = 0.25;

/// Confidence score bounds
pub const CONFIDENCE_MAX: f64 = 100.0;
pub const CONFIDENCE_MIN: f64 = 0.0;

/// Confidence lost per missed detection cycle
pub const CONFIDENCE_DECAY_STEP: f64 = 5.0;

/// Score below which tracking is flagged as low confidence
pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 50.0;
