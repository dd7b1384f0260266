//! Input-source boundary for the tracking pipeline.
//!
//! The core never touches video frames or landmark topology: a detection
//! source reduces to one normalized `(x, y, detected)` sample per cycle, and
//! the pointer fallback maps pointer pixels against the viewport into the
//! same normalized range.

use crate::{Error, Result};
use std::ops::Range;

/// One normalized facial-reference-point observation.
///
/// Coordinates are nominally in `[-1, 1]` with 0 at center; the range is not
/// hard-enforced here, the smoother clamps downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Whether a face was found this cycle
    pub detected: bool,
}

impl PositionSample {
    /// A found-face sample
    #[must_use]
    pub const fn found(x: f64, y: f64) -> Self {
        Self { x, y, detected: true }
    }

    /// A missed-detection sample
    #[must_use]
    pub const fn missed() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            detected: false,
        }
    }
}

/// Boundary to the raw landmark-detection subsystem.
///
/// Implementations own the capture resource. `release` must drop the
/// underlying handle synchronously so a mode switch never leaves two
/// consumers holding the device across a frame tick.
pub trait DetectionSource: Send {
    /// Acquire the capture resource. A failure here is non-fatal to the
    /// pipeline: the session falls back to pointer input without retrying.
    fn init(&mut self) -> Result<()>;

    /// Produce one sample for the current detection cycle
    fn poll(&mut self) -> PositionSample;

    /// Release the capture resource synchronously
    fn release(&mut self);
}

/// Map a pointer position against viewport dimensions into `[-1, 1]`
pub fn pointer_to_normalized(pointer_x: f64, pointer_y: f64, viewport_width: f64, viewport_height: f64) -> Result<(f64, f64)> {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "Viewport dimensions must be positive, got {viewport_width}x{viewport_height}"
        )));
    }
    Ok((
        (pointer_x / viewport_width - 0.5) * 2.0,
        (pointer_y / viewport_height - 0.5) * 2.0,
    ))
}

/// Always-available pointer fallback source
pub struct PointerSource {
    viewport_width: f64,
    viewport_height: f64,
    x: f64,
    y: f64,
}

impl PointerSource {
    /// Create a pointer source centered in the given viewport.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for a zero-sized viewport.
    pub fn new(viewport_width: f64, viewport_height: f64) -> Result<Self> {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Viewport dimensions must be positive, got {viewport_width}x{viewport_height}"
            )));
        }
        Ok(Self {
            viewport_width,
            viewport_height,
            x: 0.0,
            y: 0.0,
        })
    }

    /// Record the latest pointer position in pixels
    pub fn set_pointer(&mut self, pixel_x: f64, pixel_y: f64) {
        if let Ok((x, y)) = pointer_to_normalized(pixel_x, pixel_y, self.viewport_width, self.viewport_height) {
            self.x = x;
            self.y = y;
        }
    }

    /// Update the viewport dimensions, e.g. after a window resize
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<()> {
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Viewport dimensions must be positive, got {width}x{height}"
            )));
        }
        self.viewport_width = width;
        self.viewport_height = height;
        Ok(())
    }

    /// Current normalized pointer position
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Deterministic synthetic detector producing sinusoidal head motion with
/// scripted dropout windows. Stands in for the real landmark detector in the
/// demo binary and in tests.
pub struct ScriptedSource {
    amplitude: f64,
    period_frames: f64,
    dropouts: Vec<Range<u64>>,
    fail_init: bool,
    frame: u64,
    acquired: bool,
}

impl ScriptedSource {
    /// Create a source oscillating with the given amplitude and period
    #[must_use]
    pub fn new(amplitude: f64, period_frames: f64) -> Self {
        Self {
            amplitude,
            period_frames,
            dropouts: Vec::new(),
            fail_init: false,
            frame: 0,
            acquired: false,
        }
    }

    /// Add a frame range during which detection reports a miss
    #[must_use]
    pub fn with_dropout(mut self, frames: Range<u64>) -> Self {
        self.dropouts.push(frames);
        self
    }

    /// Make `init` fail, simulating an unavailable capture device
    #[must_use]
    pub fn with_failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// Whether the simulated capture resource is currently held
    #[must_use]
    pub const fn is_acquired(&self) -> bool {
        self.acquired
    }
}

impl DetectionSource for ScriptedSource {
    fn init(&mut self) -> Result<()> {
        if self.fail_init {
            return Err(Error::Detector("Capture device unavailable".to_string()));
        }
        self.acquired = true;
        Ok(())
    }

    fn poll(&mut self) -> PositionSample {
        let frame = self.frame;
        self.frame += 1;

        if self.dropouts.iter().any(|r| r.contains(&frame)) {
            return PositionSample::missed();
        }

        let phase = 2.0 * std::f64::consts::PI * (frame as f64) / self.period_frames;
        PositionSample::found(self.amplitude * phase.sin(), self.amplitude * 0.5 * phase.cos())
    }

    fn release(&mut self) {
        self.acquired = false;
    }
}
