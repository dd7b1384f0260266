//! Configuration management for the parallax window pipeline

use crate::confidence::{ConfidenceTracker, InputMode};
use crate::constants::{
    CONFIDENCE_MAX, CONFIDENCE_MIN, DEFAULT_BETA, DEFAULT_D_CUTOFF, DEFAULT_FREQUENCY,
    DEFAULT_LERP_FACTOR, DEFAULT_LOW_CONFIDENCE_THRESHOLD, DEFAULT_MIN_CUTOFF, DEFAULT_SENSITIVITY,
    LERP_FACTOR_MAX, LERP_FACTOR_MIN, SENSITIVITY_MAX, SENSITIVITY_MIN,
};
use crate::filters::one_euro::OneEuroFilter2D;
use crate::mapper::ParallaxMapper;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Adaptive filter tuning
    pub filter: FilterConfig,

    /// Motion smoother configuration
    pub smoother: SmootherConfig,

    /// Confidence tracking configuration
    pub confidence: ConfidenceConfig,

    /// Parallax mapping configuration
    pub mapper: MapperConfig,
}

/// Adaptive filter tuning constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Initially assumed sample rate (Hz)
    pub frequency: f64,

    /// Minimum smoothing-frequency floor (Hz)
    pub min_cutoff: f64,

    /// Speed sensitivity coefficient
    pub beta: f64,

    /// Derivative smoothing cutoff (Hz)
    pub d_cutoff: f64,
}

/// Motion smoother parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmootherConfig {
    /// Exponential interpolation factor (0.01-0.5)
    pub lerp_factor: f64,
}

/// Confidence tracking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Score below which the low-confidence alert fires (0-100)
    pub low_threshold: f64,

    /// Initial input mode ("tracking" or "fallback")
    pub initial_mode: String,
}

/// Parallax mapping parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Camera translation sensitivity (0.5-5.0)
    pub sensitivity: f64,

    /// Emit asymmetric frustum shifts alongside the camera offset
    pub enable_off_axis: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            smoother: SmootherConfig::default(),
            confidence: ConfidenceConfig::default(),
            mapper: MapperConfig::default(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            min_cutoff: DEFAULT_MIN_CUTOFF,
            beta: DEFAULT_BETA,
            d_cutoff: DEFAULT_D_CUTOFF,
        }
    }
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            lerp_factor: DEFAULT_LERP_FACTOR,
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            initial_mode: "tracking".to_string(),
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            enable_off_axis: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Initial input mode parsed from the config
    pub fn initial_mode(&self) -> Result<InputMode> {
        match self.confidence.initial_mode.to_lowercase().as_str() {
            "tracking" => Ok(InputMode::Tracking),
            "fallback" => Ok(InputMode::Fallback),
            other => Err(Error::Config(format!("Unknown input mode: {other}"))),
        }
    }

    /// Build a parallax mapper from this configuration
    #[must_use]
    pub fn create_mapper(&self) -> ParallaxMapper {
        let filters = OneEuroFilter2D::new(
            self.filter.frequency,
            self.filter.min_cutoff,
            self.filter.beta,
            self.filter.d_cutoff,
        );
        ParallaxMapper::with_filters(
            filters,
            self.mapper.sensitivity,
            self.smoother.lerp_factor,
            self.mapper.enable_off_axis,
        )
    }

    /// Build a confidence tracker from this configuration
    pub fn create_tracker(&self) -> Result<ConfidenceTracker> {
        Ok(ConfidenceTracker::new(self.initial_mode()?, self.confidence.low_threshold))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.filter.frequency <= 0.0 {
            return Err(Error::Config("Filter frequency must be positive".to_string()));
        }
        if self.filter.min_cutoff <= 0.0 {
            return Err(Error::Config("Minimum cutoff must be positive".to_string()));
        }
        if self.filter.beta < 0.0 {
            return Err(Error::Config("Beta must be non-negative".to_string()));
        }
        if self.filter.d_cutoff <= 0.0 {
            return Err(Error::Config("Derivative cutoff must be positive".to_string()));
        }
        if !(LERP_FACTOR_MIN..=LERP_FACTOR_MAX).contains(&self.smoother.lerp_factor) {
            return Err(Error::Config(format!(
                "Lerp factor must be between {LERP_FACTOR_MIN} and {LERP_FACTOR_MAX}"
            )));
        }
        if !(SENSITIVITY_MIN..=SENSITIVITY_MAX).contains(&self.mapper.sensitivity) {
            return Err(Error::Config(format!(
                "Sensitivity must be between {SENSITIVITY_MIN} and {SENSITIVITY_MAX}"
            )));
        }
        if !(CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&self.confidence.low_threshold) {
            return Err(Error::Config(
                "Low confidence threshold must be between 0 and 100".to_string(),
            ));
        }
        self.initial_mode()?;

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Parallax Window Configuration

# Adaptive filter tuning
filter:
  frequency: 60.0
  min_cutoff: 1.0
  beta: 0.007
  d_cutoff: 1.0

# Motion smoother
smoother:
  lerp_factor: 0.08

# Confidence tracking
confidence:
  low_threshold: 50.0
  initial_mode: "tracking"

# Parallax mapping
mapper:
  sensitivity: 2.0
  enable_off_axis: true
"#;
