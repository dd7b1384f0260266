//! Detection confidence tracking and input-mode state machine.
//!
//! Confidence rises to full instantly on any valid detection and decays by a
//! fixed step per missed cycle. The asymmetry is deliberate: momentary
//! reacquisition is rewarded immediately, while a multi-frame decay gives the
//! host time to surface an alert without flickering on single-frame dropouts.

use crate::constants::{
    CONFIDENCE_DECAY_STEP, CONFIDENCE_MAX, CONFIDENCE_MIN, DEFAULT_LOW_CONFIDENCE_THRESHOLD,
};
use crate::{Error, Result};

/// Source currently driving the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Face-tracking detector input
    Tracking,
    /// Pointer/manual fallback input
    Fallback,
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Tracking
    }
}

/// Decaying confidence score plus the mode-transition state machine
pub struct ConfidenceTracker {
    score: f64,
    mode: InputMode,
    initial_mode: InputMode,
    low_threshold: f64,
    switch_in_progress: bool,
}

impl ConfidenceTracker {
    /// Create a tracker at full confidence in the given mode.
    ///
    /// # Panics
    ///
    /// Panics if `low_threshold` is outside `[0, 100]`.
    #[must_use]
    pub fn new(initial_mode: InputMode, low_threshold: f64) -> Self {
        assert!(
            (CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&low_threshold),
            "Low confidence threshold must be in [0, 100]"
        );
        Self {
            score: CONFIDENCE_MAX,
            mode: initial_mode,
            initial_mode,
            low_threshold,
            switch_in_progress: false,
        }
    }

    /// Record one detection cycle and return the updated score.
    ///
    /// A valid detection restores full confidence immediately; a miss decays
    /// the score by a fixed step, floored at zero.
    pub fn update(&mut self, detected: bool) -> f64 {
        if detected {
            self.score = CONFIDENCE_MAX;
        } else {
            self.score = (self.score - CONFIDENCE_DECAY_STEP).max(CONFIDENCE_MIN);
        }
        self.score
    }

    /// Current confidence score in `[0, 100]`
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Whether the score has dropped below the alert threshold
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.score < self.low_threshold
    }

    /// Current input mode
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    /// Start a mode switch. Re-entrant switches are rejected until the
    /// in-flight one resolves, so two detector acquisitions can never overlap.
    pub fn begin_switch(&mut self) -> Result<()> {
        if self.switch_in_progress {
            return Err(Error::SwitchInProgress);
        }
        self.switch_in_progress = true;
        Ok(())
    }

    /// Finish the in-flight switch, entering `mode` at full confidence
    pub fn complete_switch(&mut self, mode: InputMode) {
        self.mode = mode;
        self.score = CONFIDENCE_MAX;
        self.switch_in_progress = false;
    }

    /// Abandon the in-flight switch, keeping the current mode
    pub fn abort_switch(&mut self) {
        self.switch_in_progress = false;
    }

    /// Restore the freshly constructed state
    pub fn reset(&mut self) {
        self.score = CONFIDENCE_MAX;
        self.mode = self.initial_mode;
        self.switch_in_progress = false;
    }
}

impl Default for ConfidenceTracker {
    fn default() -> Self {
        Self::new(InputMode::default(), DEFAULT_LOW_CONFIDENCE_THRESHOLD)
    }
}
