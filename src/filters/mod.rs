//! Signal filtering for noisy tracking samples.
//!
//! This module provides the jitter-reduction stage of the pipeline: a scalar
//! filter trait plus the adaptive one-pole implementation used per axis.

/// Adaptive one-pole ("One Euro" style) filter
pub mod one_euro;

use crate::{Error, Result};

/// Trait for per-axis scalar signal filters
pub trait SignalFilter: Send + Sync {
    /// Apply the filter to a new sample.
    ///
    /// `timestamp` is in seconds; when `None`, a monotonic clock is used.
    fn filter(&mut self, x: f64, timestamp: Option<f64>) -> f64;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct PassthroughFilter;

impl SignalFilter for PassthroughFilter {
    fn filter(&mut self, x: f64, _timestamp: Option<f64>) -> f64 {
        x
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "PassthroughFilter"
    }
}

/// Create a signal filter by type name
pub fn create_filter(filter_type: &str) -> Result<Box<dyn SignalFilter>> {
    match filter_type.to_lowercase().as_str() {
        "none" | "passthrough" => Ok(Box::new(PassthroughFilter)),
        "one_euro" | "oneeuro" => Ok(Box::new(one_euro::OneEuroFilter::default())),
        _ => Err(Error::Filter(format!("Unknown filter type: {filter_type}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_filter() {
        let mut filter = PassthroughFilter;
        assert_eq!(filter.filter(0.42, Some(0.0)), 0.42);
        assert_eq!(filter.filter(-0.9, Some(0.1)), -0.9);
    }

    #[test]
    fn test_create_filter() {
        assert!(create_filter("none").is_ok());
        assert!(create_filter("one_euro").is_ok());
        assert!(create_filter("unknown").is_err());
    }
}
