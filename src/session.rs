//! Tracking session orchestration.
//!
//! Owns the per-frame pipeline state the host would otherwise scatter across
//! globals: current input mode, the detector handle, the last pointer
//! position and the last good head sample. The host drives it with one
//! `tick` per rendered frame and polls the returned [`FrameOutput`]; there
//! are no callbacks.

use crate::{
    confidence::{ConfidenceTracker, InputMode},
    error::Result,
    mapper::{ParallaxFrame, ParallaxMapper},
    source::{DetectionSource, PointerSource},
    Error,
};
use log::{debug, info, warn};

/// Everything the host needs from one frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    /// Camera offset and optional frustum shift for the renderer
    pub frame: ParallaxFrame,
    /// Current confidence score in `[0, 100]`
    pub score: f64,
    /// Whether the score is below the alert threshold
    pub low_confidence: bool,
    /// Source that produced this frame's input
    pub mode: InputMode,
}

/// Frame-driven session tying the mapper, confidence tracker and input
/// sources together with an explicit lifecycle
pub struct TrackingSession {
    mapper: ParallaxMapper,
    tracker: ConfidenceTracker,
    detector: Option<Box<dyn DetectionSource>>,
    pointer: PointerSource,
    last_head: (f64, f64),
    running: bool,
}

impl TrackingSession {
    /// Assemble a session. The detector is optional; without one the session
    /// can only run in fallback mode.
    #[must_use]
    pub fn new(
        mapper: ParallaxMapper,
        tracker: ConfidenceTracker,
        pointer: PointerSource,
        detector: Option<Box<dyn DetectionSource>>,
    ) -> Self {
        Self {
            mapper,
            tracker,
            detector,
            pointer,
            last_head: (0.0, 0.0),
            running: false,
        }
    }

    /// Start the session.
    ///
    /// If the configured initial mode is tracking, the detector is acquired
    /// here; a failed acquisition logs a warning and drops the session into
    /// fallback mode for this attempt (no retry loop).
    pub fn start(&mut self) {
        info!("Starting tracking session in {:?} mode", self.tracker.mode());
        if self.tracker.mode() == InputMode::Tracking && !self.acquire_detector() {
            self.tracker.complete_switch(InputMode::Fallback);
            info!("Falling back to pointer input");
        }
        self.running = true;
    }

    /// Stop the session, releasing the capture resource
    pub fn stop(&mut self) {
        if let Some(detector) = &mut self.detector {
            detector.release();
        }
        self.running = false;
        info!("Tracking session stopped");
    }

    /// Switch the input source, returning the mode actually in effect.
    ///
    /// Switches are serialized: a request while another switch is completing
    /// returns [`Error::SwitchInProgress`]. A switch to tracking that fails
    /// detector acquisition resolves to fallback rather than erroring.
    pub fn switch_mode(&mut self, target: InputMode) -> Result<InputMode> {
        if self.tracker.mode() == target {
            return Ok(target);
        }
        self.tracker.begin_switch()?;

        match target {
            InputMode::Fallback => {
                // Release before the next tick so two consumers never hold
                // the capture device at once.
                if let Some(detector) = &mut self.detector {
                    detector.release();
                }
                self.tracker.complete_switch(InputMode::Fallback);
                info!("Switched to pointer input");
            }
            InputMode::Tracking => {
                if self.acquire_detector() {
                    self.tracker.complete_switch(InputMode::Tracking);
                    info!("Switched to tracked input");
                } else {
                    self.tracker.abort_switch();
                    info!("Staying in pointer input");
                }
            }
        }
        Ok(self.tracker.mode())
    }

    /// Run one frame of the pipeline.
    ///
    /// In tracking mode the detector is polled and the confidence score
    /// updated; on a missed detection the last good head position keeps
    /// driving the smoother. In fallback mode the pointer position drives
    /// the pipeline directly. No failure path halts the frame loop.
    pub fn tick(&mut self, timestamp: Option<f64>) -> Result<FrameOutput> {
        if !self.running {
            return Err(Error::InvalidInput("Session has not been started".to_string()));
        }

        let (head_x, head_y) = match self.tracker.mode() {
            InputMode::Tracking => {
                let sample = match &mut self.detector {
                    Some(detector) => detector.poll(),
                    None => crate::source::PositionSample::missed(),
                };
                self.tracker.update(sample.detected);
                if sample.detected {
                    self.last_head = (sample.x, sample.y);
                } else {
                    debug!("Missed detection, score {}", self.tracker.score());
                }
                self.last_head
            }
            InputMode::Fallback => self.pointer.position(),
        };

        let frame = self.mapper.update(head_x, head_y, timestamp);

        Ok(FrameOutput {
            frame,
            score: self.tracker.score(),
            low_confidence: self.tracker.is_low(),
            mode: self.tracker.mode(),
        })
    }

    /// Record the latest pointer position in pixels
    pub fn pointer_moved(&mut self, pixel_x: f64, pixel_y: f64) {
        self.pointer.set_pointer(pixel_x, pixel_y);
    }

    /// Re-center the view: smoothed position to origin, filter history
    /// cleared. Confidence state is deliberately left alone so a re-center
    /// never masks degraded tracking.
    pub fn recenter(&mut self) {
        self.mapper.recenter();
        self.last_head = (0.0, 0.0);
    }

    /// Current input mode
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.tracker.mode()
    }

    /// Current confidence score
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.tracker.score()
    }

    /// Whether `start` has been called without a matching `stop`
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Adjust parallax sensitivity (clamped)
    pub fn set_sensitivity(&mut self, sensitivity: f64) {
        self.mapper.set_sensitivity(sensitivity);
    }

    /// Adjust the smoother's interpolation factor (clamped)
    pub fn set_lerp_factor(&mut self, lerp_factor: f64) {
        self.mapper.set_lerp_factor(lerp_factor);
    }

    fn acquire_detector(&mut self) -> bool {
        match &mut self.detector {
            Some(detector) => match detector.init() {
                Ok(()) => {
                    debug!("Detection source acquired");
                    true
                }
                Err(e) => {
                    warn!("Failed to acquire detection source: {e}");
                    detector.release();
                    false
                }
            },
            None => {
                warn!("No detection source configured");
                false
            }
        }
    }
}
