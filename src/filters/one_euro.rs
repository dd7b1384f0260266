//! Adaptive one-pole low-pass filter ("One Euro" style).
//!
//! Suppresses high-frequency jitter while staying responsive to fast
//! deliberate motion: the cutoff frequency rises with the estimated signal
//! velocity, so slow motion gets maximum smoothing and fast motion gets
//! minimum lag. No fixed window, no fixed cutoff.

use super::SignalFilter;
use crate::constants::{DEFAULT_BETA, DEFAULT_D_CUTOFF, DEFAULT_FREQUENCY, DEFAULT_MIN_CUTOFF, FALLBACK_DT};
use std::f64::consts::PI;
use std::time::Instant;

/// Adaptive one-pole filter for a single scalar axis
pub struct OneEuroFilter {
    initial_frequency: f64,
    min_cutoff: f64,
    beta: f64,
    d_cutoff: f64,

    // State
    last_raw: Option<f64>,
    last_filtered: f64,
    last_derivative: f64,
    last_timestamp: f64,
    estimated_frequency: f64,
    epoch: Instant,
}

impl OneEuroFilter {
    /// Create a new adaptive filter.
    ///
    /// `frequency` is the initially assumed sample rate in Hz, `min_cutoff`
    /// the smoothing-frequency floor, `beta` the speed sensitivity
    /// coefficient and `d_cutoff` the derivative smoothing cutoff.
    ///
    /// # Panics
    ///
    /// Panics if `frequency`, `min_cutoff` or `d_cutoff` is not positive, or
    /// if `beta` is negative.
    #[must_use]
    pub fn new(frequency: f64, min_cutoff: f64, beta: f64, d_cutoff: f64) -> Self {
        assert!(frequency > 0.0, "Frequency must be positive");
        assert!(min_cutoff > 0.0, "Minimum cutoff must be positive");
        assert!(beta >= 0.0, "Beta must be non-negative");
        assert!(d_cutoff > 0.0, "Derivative cutoff must be positive");

        Self {
            initial_frequency: frequency,
            min_cutoff,
            beta,
            d_cutoff,
            last_raw: None,
            last_filtered: 0.0,
            last_derivative: 0.0,
            last_timestamp: 0.0,
            estimated_frequency: frequency,
            epoch: Instant::now(),
        }
    }

    /// Low-pass blend factor for a given cutoff at the current sample rate
    fn alpha(&self, cutoff: f64) -> f64 {
        let tau = 1.0 / (2.0 * PI * cutoff);
        let te = 1.0 / self.estimated_frequency;
        1.0 / (1.0 + tau / te)
    }
}

impl Default for OneEuroFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY, DEFAULT_MIN_CUTOFF, DEFAULT_BETA, DEFAULT_D_CUTOFF)
    }
}

impl SignalFilter for OneEuroFilter {
    fn filter(&mut self, x: f64, timestamp: Option<f64>) -> f64 {
        // A single non-finite sample stored as state would corrupt every
        // later output until reset, so drop it here.
        if !x.is_finite() {
            return if self.last_raw.is_some() { self.last_filtered } else { 0.0 };
        }

        let now = timestamp.unwrap_or_else(|| self.epoch.elapsed().as_secs_f64());

        let Some(last_raw) = self.last_raw else {
            // First sample passes through unfiltered
            self.last_raw = Some(x);
            self.last_filtered = x;
            self.last_timestamp = now;
            return x;
        };

        let dt = now - self.last_timestamp;
        let dt_effective = if dt > 0.0 {
            self.estimated_frequency = 1.0 / dt;
            dt
        } else {
            FALLBACK_DT
        };

        // Velocity estimate, smoothed through a fixed-cutoff low-pass
        let dx = (x - last_raw) / dt_effective;
        let a_d = self.alpha(self.d_cutoff);
        let dx_hat = a_d * dx + (1.0 - a_d) * self.last_derivative;

        // Faster motion raises the cutoff and so the blend factor
        let cutoff = self.beta.mul_add(dx_hat.abs(), self.min_cutoff);
        let a = self.alpha(cutoff);

        let filtered = a * x + (1.0 - a) * self.last_filtered;

        self.last_raw = Some(x);
        self.last_filtered = filtered;
        self.last_derivative = dx_hat;
        self.last_timestamp = now;

        filtered
    }

    fn reset(&mut self) {
        self.last_raw = None;
        self.last_filtered = 0.0;
        self.last_derivative = 0.0;
        self.last_timestamp = 0.0;
        self.estimated_frequency = self.initial_frequency;
    }

    fn name(&self) -> &str {
        "OneEuroFilter"
    }
}

/// Pair of adaptive filters covering both axes of a 2D position signal
pub struct OneEuroFilter2D {
    /// Horizontal axis filter
    pub x: OneEuroFilter,
    /// Vertical axis filter
    pub y: OneEuroFilter,
}

impl OneEuroFilter2D {
    /// Create a filter pair sharing one tuning
    #[must_use]
    pub fn new(frequency: f64, min_cutoff: f64, beta: f64, d_cutoff: f64) -> Self {
        Self {
            x: OneEuroFilter::new(frequency, min_cutoff, beta, d_cutoff),
            y: OneEuroFilter::new(frequency, min_cutoff, beta, d_cutoff),
        }
    }

    /// Filter both axes of a sample
    pub fn filter(&mut self, x: f64, y: f64, timestamp: Option<f64>) -> (f64, f64) {
        (self.x.filter(x, timestamp), self.y.filter(y, timestamp))
    }

    /// Reset both axes
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

impl Default for OneEuroFilter2D {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY, DEFAULT_MIN_CUTOFF, DEFAULT_BETA, DEFAULT_D_CUTOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_passthrough() {
        let mut filter = OneEuroFilter::default();
        assert_eq!(filter.filter(0.37, Some(0.0)), 0.37);
    }

    #[test]
    fn test_reset_restores_passthrough() {
        let mut filter = OneEuroFilter::default();
        filter.filter(0.1, Some(0.0));
        filter.filter(0.5, Some(1.0 / 60.0));
        filter.reset();
        filter.reset(); // Second reset must be a no-op
        assert_eq!(filter.filter(-0.8, Some(0.0)), -0.8);
    }

    #[test]
    fn test_constant_input_stays_constant() {
        let mut filter = OneEuroFilter::default();
        for i in 0..10 {
            let out = filter.filter(0.25, Some(f64::from(i) / 60.0));
            assert!((out - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_dt_uses_fallback_interval() {
        let mut filter = OneEuroFilter::default();
        filter.filter(0.0, Some(1.0));
        // Same timestamp twice must not divide by zero or go backwards
        let out = filter.filter(1.0, Some(1.0));
        assert!(out.is_finite());
        assert!(out > 0.0 && out < 1.0);
    }

    #[test]
    fn test_non_finite_samples_are_dropped() {
        let mut filter = OneEuroFilter::default();
        filter.filter(0.5, Some(0.0));
        let out = filter.filter(f64::NAN, Some(1.0 / 60.0));
        assert_eq!(out, 0.5);
        let out = filter.filter(f64::INFINITY, Some(2.0 / 60.0));
        assert_eq!(out, 0.5);
        // State stays usable afterwards
        let out = filter.filter(0.6, Some(3.0 / 60.0));
        assert!(out.is_finite());
        assert!(out > 0.5 && out < 0.6);
    }

    #[test]
    fn test_pair_filters_axes_independently() {
        let mut pair = OneEuroFilter2D::default();
        let (x, y) = pair.filter(0.3, -0.7, Some(0.0));
        assert_eq!(x, 0.3);
        assert_eq!(y, -0.7);
    }

    #[test]
    #[should_panic(expected = "Minimum cutoff must be positive")]
    fn test_zero_min_cutoff_rejected() {
        let _ = OneEuroFilter::new(60.0, 0.0, 0.007, 1.0);
    }
}
